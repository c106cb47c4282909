use std::convert::Infallible;

use crate::algorithms::hook::EditHook;
use crate::algorithms::utils::relocate;
use crate::types::Record;

/// A [`EditHook`] that applies edit operations to a copy of the old sequence.
///
/// Operations are matched by id against the records currently held, so the
/// hook expects them in the order [`diff`](crate::algorithms::diff) reports
/// them.  When the hook is finished every record's `position` is set to its
/// index.
///
/// # Panics
///
/// A delete, change or move naming an id the hook does not currently hold
/// panics.  Such an operation does not belong to a script for this sequence.
#[derive(Debug, Clone)]
pub struct Replay<K, V> {
    records: Vec<Record<K, V>>,
}

impl<K: Clone + Eq, V: Clone> Replay<K, V> {
    /// Creates a replay hook starting out from `old`.
    pub fn new(old: &[Record<K, V>]) -> Replay<K, V> {
        Replay {
            records: old.to_vec(),
        }
    }

    /// Accesses the records in their current state.
    pub fn records(&self) -> &[Record<K, V>] {
        &self.records
    }

    /// Converts the hook into the resulting sequence.
    pub fn into_records(self) -> Vec<Record<K, V>> {
        self.records
    }

    fn find(&self, id: &K, op: &str) -> usize {
        match self.records.iter().position(|r| &r.id == id) {
            Some(idx) => idx,
            None => panic!("cannot replay {}: record is not in the sequence", op),
        }
    }
}

impl<K: Clone + Eq, V: Clone> EditHook<K, V> for Replay<K, V> {
    type Error = Infallible;

    fn added(&mut self, value: &Record<K, V>, position: usize) -> Result<(), Self::Error> {
        let at = position.min(self.records.len());
        self.records.insert(at, value.clone());
        Ok(())
    }

    fn deleted(&mut self, value: &Record<K, V>, _position: usize) -> Result<(), Self::Error> {
        let idx = self.find(&value.id, "delete");
        self.records.remove(idx);
        Ok(())
    }

    fn changed(
        &mut self,
        _old_value: &Record<K, V>,
        new_value: &Record<K, V>,
        _position: usize,
    ) -> Result<(), Self::Error> {
        let idx = self.find(&new_value.id, "change");
        self.records[idx].value = new_value.value.clone();
        Ok(())
    }

    fn moved(
        &mut self,
        value: &Record<K, V>,
        _from_position: usize,
        to_position: usize,
    ) -> Result<(), Self::Error> {
        let idx = self.find(&value.id, "move");
        let to = to_position.min(self.records.len() - 1);
        relocate(&mut self.records, idx, to);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        for (idx, record) in self.records.iter_mut().enumerate() {
            record.position = idx;
        }
        Ok(())
    }
}

#[test]
fn test_replay_by_id() {
    let old = vec![
        Record::new(1, "a", 0),
        Record::new(2, "b", 1),
        Record::new(3, "c", 2),
    ];
    let mut r = Replay::new(&old);
    r.added(&Record::new(4, "d", 0), 0).unwrap();
    r.deleted(&Record::new(2, "b", 1), 1).unwrap();
    r.changed(&Record::new(3, "c", 2), &Record::new(3, "C", 1), 1)
        .unwrap();
    r.moved(&Record::new(3, "C", 1), 2, 1).unwrap();
    r.finish().unwrap();
    assert_eq!(
        r.into_records(),
        vec![
            Record::new(4, "d", 0),
            Record::new(3, "C", 1),
            Record::new(1, "a", 2),
        ]
    );
}

#[test]
#[should_panic(expected = "cannot replay delete")]
fn test_replay_unknown_delete() {
    let mut r = Replay::new(&[Record::new(1, "a", 0)]);
    r.deleted(&Record::new(7, "x", 0), 0).unwrap();
}

#[test]
#[should_panic(expected = "cannot replay move")]
fn test_replay_released_move() {
    let mut r = Replay::new(&[Record::new(1, "a", 0), Record::new(2, "b", 1)]);
    r.deleted(&Record::new(2, "b", 1), 1).unwrap();
    r.moved(&Record::new(2, "b", 0), 1, 0).unwrap();
}
