//! The edit script algorithm and its building blocks.
//!
//! The implementation in this module is relatively low level.  It drives an
//! [`EditHook`] which gets invoked for every discovered operation and does
//! not validate its inputs.  Typically you would use the higher level
//! [`diff_records`](crate::diff_records) function or
//! [`DiffConfig`](crate::DiffConfig) instead, but direct access can be
//! useful to stream operations somewhere without collecting them first.
//!
//! The algorithm runs in three passes:
//!
//! * [`matching`]: partitions records into added, deleted and changed ones
//!   by id.
//! * [`simulate`]: applies the adds and deletes to a working copy of the old
//!   sequence so that its index space matches the one of the updated
//!   sequence.
//! * [`moves`]: relocates records in the working copy until its order
//!   matches the updated sequence, reporting every relocation as a move.

// general traits and utilities
mod capture;
mod hook;
mod replay;
pub mod utils;

use std::hash::Hash;

use log::debug;

pub use capture::*;
pub use hook::*;
pub use replay::*;

// the passes
pub mod matching;
pub mod moves;
pub mod simulate;

use crate::types::{EditScript, Record};

/// Creates an edit script between `old` and `new` and reports it to `d`.
///
/// Operations are reported in this order: all adds (in updated sequence
/// order), all deletes (in old sequence order), all changes (in updated
/// sequence order) and finally all moves in the order they were resolved.
/// [`EditHook::finish`] is called at the end.
///
/// Both sequences are expected to hold unique ids.  Positions are taken
/// from the indices within the slices, not from the records.
///
/// # Panics
///
/// Panics if ids repeat within a sequence, since the working copy then
/// cannot be aligned with the updated sequence.
pub fn diff<K, V, D>(d: &mut D, old: &[Record<K, V>], new: &[Record<K, V>]) -> Result<(), D::Error>
where
    K: Hash + Eq,
    V: PartialEq,
    D: EditHook<K, V>,
{
    let added = matching::added_records(old, new);
    let deleted = matching::deleted_records(old, new);
    let changed = matching::changed_records(old, new);
    debug!(
        "diffing {} against {} records: {} added, {} deleted, {} changed",
        old.len(),
        new.len(),
        added.len(),
        deleted.len(),
        changed.len()
    );

    let mut working = simulate::WorkingCopy::new(old);
    working.insert_added(d, &added)?;
    working.remove_deleted(d, &deleted)?;

    for pair in &changed {
        d.changed(pair.old, pair.new, pair.position)?;
    }

    moves::resolve(d, &mut working, new)?;
    d.finish()
}

/// Creates an edit script between `old` and `new` capturing the ops.
///
/// This is like [`diff`] but instead of using an arbitrary hook this will
/// always use [`Capture`] and return the captured [`EditScript`].
pub fn capture_diff<K, V>(old: &[Record<K, V>], new: &[Record<K, V>]) -> EditScript<K, V>
where
    K: Hash + Eq + Clone,
    V: PartialEq + Clone,
{
    let mut d = Capture::new();
    match diff(&mut d, old, new) {
        Ok(()) => d.into_script(),
        Err(never) => match never {},
    }
}

#[test]
fn test_hook_order() {
    #[derive(Default)]
    struct D(Vec<String>);

    impl EditHook<u32, char> for D {
        type Error = ();
        fn added(&mut self, value: &Record<u32, char>, position: usize) -> Result<(), ()> {
            self.0.push(format!("add {} @{}", value.id, position));
            Ok(())
        }
        fn deleted(&mut self, value: &Record<u32, char>, position: usize) -> Result<(), ()> {
            self.0.push(format!("del {} @{}", value.id, position));
            Ok(())
        }
        fn changed(
            &mut self,
            _old: &Record<u32, char>,
            new: &Record<u32, char>,
            position: usize,
        ) -> Result<(), ()> {
            self.0.push(format!("chg {} @{}", new.id, position));
            Ok(())
        }
        fn moved(&mut self, value: &Record<u32, char>, from: usize, to: usize) -> Result<(), ()> {
            self.0.push(format!("mov {} {}->{}", value.id, from, to));
            Ok(())
        }
        fn finish(&mut self) -> Result<(), ()> {
            self.0.push("finish".into());
            Ok(())
        }
    }

    let old = vec![
        Record::new(1, 'a', 0),
        Record::new(2, 'b', 1),
        Record::new(3, 'c', 2),
    ];
    let new = vec![
        Record::new(4, 'd', 0),
        Record::new(2, 'B', 1),
        Record::new(1, 'a', 2),
    ];
    let mut d = D::default();
    diff(&mut d, &old, &new).unwrap();
    assert_eq!(
        d.0,
        vec!["add 4 @0", "del 3 @2", "chg 2 @1", "mov 2 2->1", "finish"]
    );
}

#[test]
fn test_hook_error_stops_diff() {
    struct Fail;

    impl EditHook<u32, ()> for Fail {
        type Error = &'static str;
        fn deleted(&mut self, _value: &Record<u32, ()>, _position: usize) -> Result<(), Self::Error> {
            Err("no deletes allowed")
        }
        fn moved(&mut self, _value: &Record<u32, ()>, _from: usize, _to: usize) -> Result<(), Self::Error> {
            panic!("should not get this far")
        }
    }

    let old = vec![Record::new(1, (), 0), Record::new(2, (), 1)];
    let new = vec![Record::new(2, (), 0)];
    assert_eq!(diff(&mut Fail, &old, &new), Err("no deletes allowed"));
}
