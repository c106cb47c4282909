//! Identity matching.
//!
//! Partitions records into added, deleted and changed sets purely by
//! comparing ids (and payloads for changes) across the two sequences.
//! Every function here returns its results in the order of the sequence
//! it iterates over, together with the index of the record in that
//! sequence.
use std::hash::Hash;

use crate::algorithms::utils::IdIndex;
use crate::types::Record;

/// A record found in both sequences with differing payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedPair<'a, K, V> {
    /// The record as found in the old sequence.
    pub old: &'a Record<K, V>,
    /// The record as found in the updated sequence.
    pub new: &'a Record<K, V>,
    /// The index of `new` in the updated sequence.
    pub position: usize,
}

/// Returns the records of `new` whose id does not occur in `old`.
///
/// The result preserves the order of `new`.
pub fn added_records<'a, K, V>(
    old: &'a [Record<K, V>],
    new: &'a [Record<K, V>],
) -> Vec<(usize, &'a Record<K, V>)>
where
    K: Hash + Eq,
{
    missing_from(new, &IdIndex::from_records(old))
}

/// Returns the records of `old` whose id does not occur in `new`.
///
/// The result preserves the order of `old`.
pub fn deleted_records<'a, K, V>(
    old: &'a [Record<K, V>],
    new: &'a [Record<K, V>],
) -> Vec<(usize, &'a Record<K, V>)>
where
    K: Hash + Eq,
{
    missing_from(old, &IdIndex::from_records(new))
}

/// Returns the records present in both sequences whose payload differs.
///
/// The result preserves the order of `new`.
pub fn changed_records<'a, K, V>(
    old: &'a [Record<K, V>],
    new: &'a [Record<K, V>],
) -> Vec<ChangedPair<'a, K, V>>
where
    K: Hash + Eq,
    V: PartialEq,
{
    let old_index = IdIndex::from_records(old);
    new.iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let old_record = &old[old_index.get(&record.id)?];
            if old_record.value != record.value {
                Some(ChangedPair {
                    old: old_record,
                    new: record,
                    position,
                })
            } else {
                None
            }
        })
        .collect()
}

fn missing_from<'a, K, V>(
    records: &'a [Record<K, V>],
    other: &IdIndex<'_, K>,
) -> Vec<(usize, &'a Record<K, V>)>
where
    K: Hash + Eq,
{
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| !other.contains(&record.id))
        .collect()
}

#[cfg(test)]
fn seq(items: &[(u32, &'static str)]) -> Vec<Record<u32, &'static str>> {
    items
        .iter()
        .enumerate()
        .map(|(position, &(id, value))| Record::new(id, value, position))
        .collect()
}

#[test]
fn test_added_and_deleted() {
    let old = seq(&[(1, "first"), (2, "second"), (3, "third"), (4, "fourth")]);
    let new = seq(&[(3, "third"), (2, "second_new"), (4, "fourth"), (5, "fifth"), (6, "sixth")]);

    let added = added_records(&old, &new)
        .into_iter()
        .map(|(idx, r)| (idx, r.id))
        .collect::<Vec<_>>();
    assert_eq!(added, vec![(3, 5), (4, 6)]);

    let deleted = deleted_records(&old, &new)
        .into_iter()
        .map(|(idx, r)| (idx, r.id))
        .collect::<Vec<_>>();
    assert_eq!(deleted, vec![(0, 1)]);
}

#[test]
fn test_changed() {
    let old = seq(&[(1, "a"), (2, "b"), (3, "c")]);
    let new = seq(&[(3, "C"), (1, "a"), (2, "B")]);
    let changed = changed_records(&old, &new);
    assert_eq!(changed.len(), 2);
    assert_eq!(changed[0].old.value, "c");
    assert_eq!(changed[0].new.value, "C");
    assert_eq!(changed[0].position, 0);
    assert_eq!(changed[1].old, &old[1]);
    assert_eq!(changed[1].position, 2);
}

#[test]
fn test_empty_sides() {
    let old = seq(&[(1, "a"), (2, "b")]);
    let empty = seq(&[]);
    assert_eq!(added_records(&empty, &old).len(), 2);
    assert_eq!(deleted_records(&empty, &old).len(), 0);
    assert_eq!(deleted_records(&old, &empty).len(), 2);
    assert!(changed_records(&old, &empty).is_empty());
}

#[test]
fn test_repeated_ids_first_match() {
    let old = seq(&[(1, "a"), (1, "b")]);
    let new = seq(&[(1, "b")]);
    let changed = changed_records(&old, &new);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].old.value, "a");
}
