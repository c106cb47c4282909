use std::fmt;

use crate::algorithms::{EditHook, Replay};

/// A single identity bearing element of a sequence.
///
/// Two records describe the same logical entity when their `id`s are equal.
/// The `position` is expected to equal the index of the record within the
/// sequence that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record<K, V> {
    /// The identity of the record.
    pub id: K,
    /// The payload compared to detect changes.
    pub value: V,
    /// The index the record claims within its sequence.
    pub position: usize,
}

impl<K, V> Record<K, V> {
    /// Creates a new record.
    pub fn new(id: K, value: V, position: usize) -> Record<K, V> {
        Record {
            id,
            value,
            position,
        }
    }
}

/// The tag of an [`EditOp`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OpTag {
    /// A record only present in the updated sequence.
    Added,
    /// A record only present in the old sequence.
    Deleted,
    /// A record whose payload differs between the sequences.
    Changed,
    /// A record that was relocated.
    Moved,
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                OpTag::Added => "added",
                OpTag::Deleted => "deleted",
                OpTag::Changed => "changed",
                OpTag::Moved => "moved",
            }
        )
    }
}

/// A single operation of an [`EditScript`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case", tag = "op")
)]
pub enum EditOp<K, V> {
    /// `value` was inserted at `position` (see [`EditHook::added`]).
    Added { value: Record<K, V>, position: usize },
    /// `value` was removed from `position` of the old sequence
    /// (see [`EditHook::deleted`]).
    Deleted { value: Record<K, V>, position: usize },
    /// The payload of a record changed.  `position` is the index of
    /// `new_value` in the updated sequence (see [`EditHook::changed`]).
    Changed {
        old_value: Record<K, V>,
        new_value: Record<K, V>,
        position: usize,
    },
    /// `value` was relocated (see [`EditHook::moved`]).
    Moved {
        value: Record<K, V>,
        from_position: usize,
        to_position: usize,
    },
}

impl<K, V> EditOp<K, V> {
    /// Returns the tag of the operation.
    pub fn tag(&self) -> OpTag {
        match *self {
            EditOp::Added { .. } => OpTag::Added,
            EditOp::Deleted { .. } => OpTag::Deleted,
            EditOp::Changed { .. } => OpTag::Changed,
            EditOp::Moved { .. } => OpTag::Moved,
        }
    }

    /// Returns the record the operation is about.
    ///
    /// For [`EditOp::Changed`] this is the new record.
    pub fn record(&self) -> &Record<K, V> {
        match self {
            EditOp::Added { value, .. }
            | EditOp::Deleted { value, .. }
            | EditOp::Moved { value, .. } => value,
            EditOp::Changed { new_value, .. } => new_value,
        }
    }

    /// Returns the id of the record the operation is about.
    pub fn id(&self) -> &K {
        &self.record().id
    }

    fn replay<D: EditHook<K, V>>(&self, d: &mut D) -> Result<(), D::Error> {
        match self {
            EditOp::Added { value, position } => d.added(value, *position),
            EditOp::Deleted { value, position } => d.deleted(value, *position),
            EditOp::Changed {
                old_value,
                new_value,
                position,
            } => d.changed(old_value, new_value, *position),
            EditOp::Moved {
                value,
                from_position,
                to_position,
            } => d.moved(value, *from_position, *to_position),
        }
    }
}

/// The result of comparing two sequences of records.
///
/// Operations are kept in four lists, one per [`OpTag`].  Within a list
/// operations appear in the order they were discovered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditScript<K, V> {
    pub(crate) added: Vec<EditOp<K, V>>,
    pub(crate) deleted: Vec<EditOp<K, V>>,
    pub(crate) changed: Vec<EditOp<K, V>>,
    pub(crate) moved: Vec<EditOp<K, V>>,
}

impl<K, V> Default for EditScript<K, V> {
    fn default() -> EditScript<K, V> {
        EditScript {
            added: Vec::new(),
            deleted: Vec::new(),
            changed: Vec::new(),
            moved: Vec::new(),
        }
    }
}

impl<K, V> EditScript<K, V> {
    /// Returns the [`EditOp::Added`] operations.
    pub fn added(&self) -> &[EditOp<K, V>] {
        &self.added
    }

    /// Returns the [`EditOp::Deleted`] operations.
    pub fn deleted(&self) -> &[EditOp<K, V>] {
        &self.deleted
    }

    /// Returns the [`EditOp::Changed`] operations.
    pub fn changed(&self) -> &[EditOp<K, V>] {
        &self.changed
    }

    /// Returns the [`EditOp::Moved`] operations.
    pub fn moved(&self) -> &[EditOp<K, V>] {
        &self.moved
    }

    /// Iterates over all operations.
    ///
    /// Adds come first, then deletes, changes and finally moves.
    pub fn ops(&self) -> impl Iterator<Item = &EditOp<K, V>> {
        self.added
            .iter()
            .chain(self.deleted.iter())
            .chain(self.changed.iter())
            .chain(self.moved.iter())
    }

    /// Returns the total number of operations.
    pub fn len(&self) -> usize {
        self.added.len() + self.deleted.len() + self.changed.len() + self.moved.len()
    }

    /// Returns `true` if the two compared sequences were identical.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the script into a single vector in [`EditScript::ops`] order.
    pub fn into_ops(self) -> Vec<EditOp<K, V>> {
        let mut rv = self.added;
        rv.extend(self.deleted);
        rv.extend(self.changed);
        rv.extend(self.moved);
        rv
    }

    pub(crate) fn push(&mut self, op: EditOp<K, V>) {
        match op.tag() {
            OpTag::Added => self.added.push(op),
            OpTag::Deleted => self.deleted.push(op),
            OpTag::Changed => self.changed.push(op),
            OpTag::Moved => self.moved.push(op),
        }
    }

    /// Feeds all operations into a hook and finishes it.
    pub fn replay<D: EditHook<K, V>>(&self, d: &mut D) -> Result<(), D::Error> {
        for op in self.ops() {
            op.replay(d)?;
        }
        d.finish()
    }
}

impl<K, V> EditScript<K, V>
where
    K: Clone + Eq,
    V: Clone,
{
    /// Applies the script to `old` and returns the resulting sequence.
    ///
    /// For a script produced from `old` and `updated` this yields a sequence
    /// equal to `updated`.
    ///
    /// # Panics
    ///
    /// Panics if a delete, change or move names a record that `old` does not
    /// contain at that point of the replay.
    pub fn apply(&self, old: &[Record<K, V>]) -> Vec<Record<K, V>> {
        let mut r = Replay::new(old);
        match self.replay(&mut r) {
            Ok(()) => r.into_records(),
            Err(never) => match never {},
        }
    }
}

#[test]
fn test_op_accessors() {
    let op = EditOp::Changed {
        old_value: Record::new(2, "b", 1),
        new_value: Record::new(2, "X", 1),
        position: 1,
    };
    assert_eq!(op.tag(), OpTag::Changed);
    assert_eq!(op.id(), &2);
    assert_eq!(op.record().value, "X");
    assert_eq!(OpTag::Moved.to_string(), "moved");
}

#[test]
fn test_script_ordering() {
    let mut script = EditScript::default();
    script.push(EditOp::Moved {
        value: Record::new(3, "c", 0),
        from_position: 2,
        to_position: 0,
    });
    script.push(EditOp::Added {
        value: Record::new(4, "d", 3),
        position: 3,
    });
    assert_eq!(script.len(), 2);
    assert!(!script.is_empty());
    let tags = script.ops().map(|op| op.tag()).collect::<Vec<_>>();
    assert_eq!(tags, vec![OpTag::Added, OpTag::Moved]);
    let ids = script.into_ops().iter().map(|op| *op.id()).collect::<Vec<_>>();
    assert_eq!(ids, vec![4, 3]);
}

#[test]
#[cfg(feature = "serde")]
fn test_serde_op_format() {
    let op = EditOp::Moved {
        value: Record::new(3, "third", 0),
        from_position: 2,
        to_position: 0,
    };
    let json = serde_json::to_value(&op).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "op": "moved",
            "value": {"id": 3, "value": "third", "position": 0},
            "from_position": 2,
            "to_position": 0
        })
    );
}

#[test]
#[cfg(feature = "serde")]
fn test_serde_script_roundtrip() {
    let old = ["first", "second", "third", "fourth"]
        .iter()
        .enumerate()
        .map(|(idx, v)| Record::new(idx as u32 + 1, v.to_string(), idx))
        .collect::<Vec<_>>();
    let new = vec![
        Record::new(3, "third".to_string(), 0),
        Record::new(2, "second_new".to_string(), 1),
        Record::new(4, "fourth".to_string(), 2),
        Record::new(5, "fifth".to_string(), 3),
        Record::new(6, "sixth".to_string(), 4),
    ];
    let script = crate::algorithms::capture_diff(&old, &new);
    assert_eq!(script.moved().len(), 2);

    let json = serde_json::to_string(&script).unwrap();
    let restored: EditScript<u32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, script);
    assert_eq!(restored.apply(&old), new);

    let tag: OpTag = serde_json::from_str("\"changed\"").unwrap();
    assert_eq!(tag, OpTag::Changed);
}
