//! Various utilities for preparing record sequences.
//!
//! The differ expects every record's `position` to equal its index.  The
//! helpers in this module get sequences into that shape, or build them
//! from plain values.

use std::hash::Hash;

use crate::common::diff_records;
use crate::error::DiffError;
use crate::types::{EditScript, Record};

/// Sorts records by position and renumbers them.
///
/// The sort is stable, so records claiming the same position keep their
/// relative order.  Afterwards every position equals its index.
///
/// ```rust
/// use recdiff::Record;
/// use recdiff::utils::ensure_sorted;
///
/// let mut records = vec![Record::new('b', (), 4), Record::new('a', (), 1)];
/// ensure_sorted(&mut records);
/// assert_eq!(records, vec![Record::new('a', (), 0), Record::new('b', (), 1)]);
/// ```
pub fn ensure_sorted<K, V>(records: &mut [Record<K, V>]) {
    records.sort_by_key(|r| r.position);
    renumber(records);
}

/// Sets the position of every record to its index.
pub fn renumber<K, V>(records: &mut [Record<K, V>]) {
    for (idx, record) in records.iter_mut().enumerate() {
        record.position = idx;
    }
}

/// Turns plain values into a sorted record sequence.
///
/// The id of every record is derived from its value with `key`.
pub fn enumerate_records<I, K, V, F>(values: I, mut key: F) -> Vec<Record<K, V>>
where
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> K,
{
    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| Record::new(key(&value), value, position))
        .collect()
}

/// Shortcut for diffing two slices of plain values.
///
/// Every value is identified by the id `key` derives from it.
///
/// ```rust
/// use recdiff::utils::diff_keyed;
///
/// let old = [(1, "first"), (2, "second")];
/// let new = [(2, "second"), (3, "third")];
/// let script = diff_keyed(&old, &new, |x| x.0).unwrap();
/// assert_eq!(script.added().len(), 1);
/// assert_eq!(script.deleted().len(), 1);
/// assert_eq!(script.moved().len(), 1);
/// ```
pub fn diff_keyed<K, V, F>(old: &[V], new: &[V], mut key: F) -> Result<EditScript<K, V>, DiffError>
where
    K: Hash + Eq + Clone,
    V: PartialEq + Clone,
    F: FnMut(&V) -> K,
{
    let old = enumerate_records(old.iter().cloned(), &mut key);
    let new = enumerate_records(new.iter().cloned(), &mut key);
    diff_records(&old, &new)
}

#[test]
fn test_ensure_sorted_is_stable() {
    let mut records = vec![
        Record::new(1, "x", 2),
        Record::new(2, "y", 0),
        Record::new(3, "z", 2),
    ];
    ensure_sorted(&mut records);
    assert_eq!(
        records,
        vec![
            Record::new(2, "y", 0),
            Record::new(1, "x", 1),
            Record::new(3, "z", 2),
        ]
    );
}

#[test]
fn test_enumerate_records() {
    let records = enumerate_records(vec!["apple", "banana"], |v| v.len());
    assert_eq!(
        records,
        vec![Record::new(5, "apple", 0), Record::new(6, "banana", 1)]
    );
}

#[test]
fn test_diff_keyed_moves_after_insert() {
    // 3 lands at index 1 before 1 is dropped, leaving [3, 2]
    let old = [(1, "first"), (2, "second")];
    let new = [(2, "second"), (3, "third")];
    let script = diff_keyed(&old, &new, |x| x.0).unwrap();
    assert_eq!(script.moved().len(), 1);
    assert_eq!(script.moved()[0].id(), &2);

    let old = [(1, "first"), (2, "second"), (3, "third")];
    let script = diff_keyed(&old, &new, |x| x.0).unwrap();
    assert_eq!(script.deleted().len(), 1);
    assert!(script.added().is_empty());
    assert!(script.moved().is_empty());
}

#[test]
fn test_diff_keyed_duplicate_keys() {
    let err = diff_keyed(&["a", "b"], &["c"], |_| 0).unwrap_err();
    assert_eq!(
        err,
        DiffError::DuplicateId {
            side: crate::error::Side::Old,
            first: 0,
            second: 1,
        }
    );
}
