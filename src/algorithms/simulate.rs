//! Simulation of adds and deletes on a working copy of the old sequence.
use std::collections::HashSet;
use std::hash::Hash;

use crate::algorithms::hook::EditHook;
use crate::types::Record;

/// The mutable intermediate sequence the differ works on.
///
/// It only tracks ids.  After [`WorkingCopy::insert_added`] and
/// [`WorkingCopy::remove_deleted`] ran it holds exactly the ids present in
/// both sequences, which makes its index space comparable to the one of the
/// updated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy<'a, K> {
    ids: Vec<&'a K>,
}

impl<'a, K> WorkingCopy<'a, K> {
    /// Creates a working copy mirroring `old`.
    pub fn new<V>(old: &'a [Record<K, V>]) -> WorkingCopy<'a, K> {
        WorkingCopy {
            ids: old.iter().map(|r| &r.id).collect(),
        }
    }

    /// Returns the ids in their current order.
    pub fn ids(&self) -> &[&'a K] {
        &self.ids
    }

    /// Returns the current number of ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the working copy holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn ids_mut(&mut self) -> &mut Vec<&'a K> {
        &mut self.ids
    }

    /// Inserts every added record at its target index and reports it.
    ///
    /// `added` must be in updated sequence order, each entry carrying the
    /// index of the record in the updated sequence.  Later elements shift
    /// to the right.
    pub fn insert_added<V, D>(
        &mut self,
        d: &mut D,
        added: &[(usize, &'a Record<K, V>)],
    ) -> Result<(), D::Error>
    where
        D: EditHook<K, V>,
    {
        for &(position, record) in added {
            // only reachable with repeated ids in the updated sequence
            let at = position.min(self.ids.len());
            self.ids.insert(at, &record.id);
            d.added(record, position)?;
        }
        Ok(())
    }

    /// Reports every deleted record and removes it from the working copy.
    ///
    /// The reported position is the index in the old sequence, regardless
    /// of how earlier inserts shifted the record.
    pub fn remove_deleted<V, D>(
        &mut self,
        d: &mut D,
        deleted: &[(usize, &'a Record<K, V>)],
    ) -> Result<(), D::Error>
    where
        K: Hash + Eq,
        D: EditHook<K, V>,
    {
        for &(position, record) in deleted {
            d.deleted(record, position)?;
        }
        let gone = deleted.iter().map(|(_, r)| &r.id).collect::<HashSet<_>>();
        self.ids.retain(|id| !gone.contains(id));
        Ok(())
    }
}

#[cfg(test)]
use crate::algorithms::{matching, Capture};

#[test]
fn test_simulate_combined() {
    let old = vec![
        Record::new(1, "first", 0),
        Record::new(2, "second", 1),
        Record::new(3, "third", 2),
        Record::new(4, "fourth", 3),
    ];
    let new = vec![
        Record::new(3, "third", 0),
        Record::new(2, "second_new", 1),
        Record::new(4, "fourth", 2),
        Record::new(5, "fifth", 3),
        Record::new(6, "sixth", 4),
    ];
    let mut d = Capture::new();
    let mut wc = WorkingCopy::new(&old);
    wc.insert_added(&mut d, &matching::added_records(&old, &new))
        .unwrap();
    assert_eq!(wc.ids(), &[&1, &2, &3, &5, &6, &4][..]);
    wc.remove_deleted(&mut d, &matching::deleted_records(&old, &new))
        .unwrap();
    assert_eq!(wc.ids(), &[&2, &3, &5, &6, &4][..]);
    assert_eq!(wc.len(), new.len());

    let script = d.into_script();
    let added = script
        .added()
        .iter()
        .map(|op| *op.id())
        .collect::<Vec<_>>();
    assert_eq!(added, vec![5, 6]);
    assert_eq!(script.deleted()[0].id(), &1);
}

#[test]
fn test_deleted_position_ignores_shifting() {
    let old = vec![Record::new('a', (), 0), Record::new('b', (), 1)];
    let new = vec![Record::new('x', (), 0), Record::new('a', (), 1)];
    let mut d = Capture::new();
    let mut wc = WorkingCopy::new(&old);
    wc.insert_added(&mut d, &matching::added_records(&old, &new))
        .unwrap();
    wc.remove_deleted(&mut d, &matching::deleted_records(&old, &new))
        .unwrap();
    assert_eq!(wc.ids(), &[&'x', &'a'][..]);
    assert_eq!(
        d.script().deleted(),
        &[crate::types::EditOp::Deleted {
            value: Record::new('b', (), 1),
            position: 1,
        }][..]
    );
}
