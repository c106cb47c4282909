use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::algorithms::capture_diff;
use crate::error::{DiffError, Side};
use crate::types::{EditScript, Record};

/// A builder type config for diffing records.
///
/// ```rust
/// use recdiff::{DiffConfig, Record};
///
/// let old = vec![Record::new(1, "a", 0), Record::new(2, "b", 1)];
/// let new = vec![Record::new(2, "b", 0), Record::new(1, "a", 1)];
/// let script = DiffConfig::default().diff(&old, &new).unwrap();
/// assert_eq!(script.moved().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiffConfig {
    check_positions: bool,
}

impl Default for DiffConfig {
    fn default() -> DiffConfig {
        DiffConfig {
            check_positions: true,
        }
    }
}

impl DiffConfig {
    /// Creates the default configuration.
    pub fn new() -> DiffConfig {
        DiffConfig::default()
    }

    /// Changes whether the `position` of every record is checked.
    ///
    /// The default is `true`: a record whose position differs from its
    /// index is rejected with [`DiffError::PositionMismatch`].  When turned
    /// off the indices in the slices are authoritative and the records'
    /// positions are ignored.
    pub fn check_positions(&mut self, yes: bool) -> &mut Self {
        self.check_positions = yes;
        self
    }

    /// Checks that both sequences can be diffed.
    ///
    /// Ids must be unique within each sequence.  Unless disabled by
    /// [`DiffConfig::check_positions`] every position must also equal its
    /// index.
    pub fn validate<K, V>(&self, old: &[Record<K, V>], new: &[Record<K, V>]) -> Result<(), DiffError>
    where
        K: Hash + Eq,
    {
        self.validate_side(Side::Old, old)?;
        self.validate_side(Side::Updated, new)
    }

    fn validate_side<K, V>(&self, side: Side, records: &[Record<K, V>]) -> Result<(), DiffError>
    where
        K: Hash + Eq,
    {
        let mut seen = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            if self.check_positions && record.position != index {
                return Err(DiffError::PositionMismatch {
                    side,
                    index,
                    position: record.position,
                });
            }
            match seen.entry(&record.id) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
                Entry::Occupied(entry) => {
                    return Err(DiffError::DuplicateId {
                        side,
                        first: *entry.get(),
                        second: index,
                    });
                }
            }
        }
        Ok(())
    }

    /// Validates both sequences and creates the edit script from `old` to
    /// `new`.
    pub fn diff<K, V>(
        &self,
        old: &[Record<K, V>],
        new: &[Record<K, V>],
    ) -> Result<EditScript<K, V>, DiffError>
    where
        K: Hash + Eq + Clone,
        V: PartialEq + Clone,
    {
        self.validate(old, new)?;
        Ok(capture_diff(old, new))
    }
}

/// Creates the edit script that turns `old` into `new`.
///
/// Both sequences must be sorted so that every record's `position` equals
/// its index and ids must be unique within each sequence.  Violations are
/// reported as [`DiffError`].
///
/// Equivalent to `DiffConfig::default().diff(old, new)`.
///
/// ```rust
/// use recdiff::{diff_records, EditOp, Record};
///
/// let old = vec![Record::new(1, "a", 0), Record::new(2, "b", 1)];
/// let new = vec![Record::new(1, "a", 0), Record::new(2, "X", 1)];
/// let script = diff_records(&old, &new).unwrap();
/// assert_eq!(script.changed(), &[EditOp::Changed {
///     old_value: Record::new(2, "b", 1),
///     new_value: Record::new(2, "X", 1),
///     position: 1,
/// }][..]);
/// ```
pub fn diff_records<K, V>(
    old: &[Record<K, V>],
    new: &[Record<K, V>],
) -> Result<EditScript<K, V>, DiffError>
where
    K: Hash + Eq + Clone,
    V: PartialEq + Clone,
{
    DiffConfig::default().diff(old, new)
}

#[test]
fn test_rejects_duplicate_ids() {
    let old = vec![Record::new(1, "a", 0), Record::new(1, "b", 1)];
    assert_eq!(
        diff_records(&old, &[]),
        Err(DiffError::DuplicateId {
            side: Side::Old,
            first: 0,
            second: 1,
        })
    );
}

#[test]
fn test_rejects_unsorted() {
    let new = vec![Record::new(1, "a", 1), Record::new(2, "b", 0)];
    assert_eq!(
        diff_records(&[], &new),
        Err(DiffError::PositionMismatch {
            side: Side::Updated,
            index: 0,
            position: 1,
        })
    );
}

#[test]
fn test_unchecked_positions() {
    let old = vec![Record::new(1, "a", 7), Record::new(2, "b", 7)];
    let new = vec![Record::new(2, "b", 3), Record::new(1, "a", 3)];
    let script = DiffConfig::new()
        .check_positions(false)
        .diff(&old, &new)
        .unwrap();
    assert_eq!(script.len(), 1);
    assert_eq!(
        script.apply(&old),
        vec![Record::new(2, "b", 0), Record::new(1, "a", 1)]
    );
}
