//! Property based tests for edit scripts.

use proptest::prelude::*;
use recdiff::algorithms::capture_diff;
use recdiff::{diff_records, EditOp, Record};

/// Generates a sorted sequence with unique ids.
///
/// Ids are drawn from a small range so that two generated sequences share
/// most of their records, and payloads from a tiny one so that shared
/// records are equally likely to be changed or unchanged.
fn records(max_len: usize) -> impl Strategy<Value = Vec<Record<u32, u8>>> {
    prop::collection::btree_map(0u32..24, 0u8..3, 0..max_len)
        .prop_map(|map| map.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(position, (id, value))| Record::new(id, value, position))
                .collect::<Vec<_>>()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Applying the script to the old sequence yields the updated one.
    #[test]
    fn replay_reproduces_updated(old in records(16), new in records(16)) {
        let script = diff_records(&old, &new).unwrap();
        prop_assert_eq!(script.apply(&old), new);
    }

    /// Diffing a sequence against itself yields nothing.
    #[test]
    fn equal_inputs_yield_empty_script(seq in records(20)) {
        let script = diff_records(&seq, &seq).unwrap();
        prop_assert!(script.is_empty());
    }

    /// Repeated diffs of the same inputs are identical.
    #[test]
    fn diffing_is_deterministic(old in records(16), new in records(16)) {
        prop_assert_eq!(capture_diff(&old, &new), capture_diff(&old, &new));
    }

    /// Every reported position refers to a valid slot.
    #[test]
    fn positions_are_in_bounds(old in records(16), new in records(16)) {
        let script = diff_records(&old, &new).unwrap();
        for op in script.ops() {
            match op {
                EditOp::Added { value, position } => {
                    prop_assert_eq!(&new[*position], value);
                }
                EditOp::Deleted { value, position } => {
                    prop_assert_eq!(&old[*position], value);
                }
                EditOp::Changed { old_value, new_value, position } => {
                    prop_assert_eq!(&new[*position], new_value);
                    prop_assert_eq!(&old_value.id, &new_value.id);
                    prop_assert_ne!(&old_value.value, &new_value.value);
                }
                EditOp::Moved { from_position, to_position, .. } => {
                    prop_assert!(*from_position < new.len());
                    prop_assert!(*to_position < new.len());
                    prop_assert_ne!(from_position, to_position);
                }
            }
        }
    }

    /// Without reordering no moves are emitted.
    #[test]
    fn payload_changes_alone_do_not_move(seq in records(20), bump in any::<u8>()) {
        let new = seq
            .iter()
            .map(|r| Record::new(r.id, r.value.wrapping_add(bump % 2), r.position))
            .collect::<Vec<_>>();
        let script = diff_records(&seq, &new).unwrap();
        prop_assert!(script.moved().is_empty());
        prop_assert!(script.added().is_empty());
        prop_assert!(script.deleted().is_empty());
        let expected = if bump % 2 == 0 { 0 } else { seq.len() };
        prop_assert_eq!(script.changed().len(), expected);
    }

    /// Diffing from nothing adds everything at its index.
    #[test]
    fn pure_addition(new in records(20)) {
        let script = diff_records(&[], &new).unwrap();
        prop_assert_eq!(script.len(), new.len());
        for (idx, op) in script.added().iter().enumerate() {
            prop_assert_eq!(op, &EditOp::Added { value: new[idx].clone(), position: idx });
        }
    }

    /// Diffing to nothing deletes everything from its index.
    #[test]
    fn pure_deletion(old in records(20)) {
        let script = diff_records(&old, &[]).unwrap();
        prop_assert_eq!(script.len(), old.len());
        for (idx, op) in script.deleted().iter().enumerate() {
            prop_assert_eq!(op, &EditOp::Deleted { value: old[idx].clone(), position: idx });
        }
    }
}
