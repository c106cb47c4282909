use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::types::Record;

/// Maps ids to the index of their first occurrence in a sequence.
///
/// Lookups behave like a linear scan that stops at the first match, so
/// repeated ids resolve to the earliest record carrying them.
#[derive(Debug)]
pub struct IdIndex<'a, K> {
    by_id: HashMap<&'a K, usize>,
}

impl<'a, K: Hash + Eq> IdIndex<'a, K> {
    /// Indexes the ids yielded by `ids` by their enumeration order.
    pub fn new<I>(ids: I) -> IdIndex<'a, K>
    where
        I: IntoIterator<Item = &'a K>,
    {
        let mut by_id = HashMap::new();
        for (index, id) in ids.into_iter().enumerate() {
            if let Entry::Vacant(entry) = by_id.entry(id) {
                entry.insert(index);
            }
        }
        IdIndex { by_id }
    }

    /// Indexes the ids of a record sequence.
    pub fn from_records<V>(records: &'a [Record<K, V>]) -> IdIndex<'a, K> {
        IdIndex::new(records.iter().map(|r| &r.id))
    }

    /// Returns the index of the first occurrence of `id`.
    #[inline(always)]
    pub fn get(&self, id: &K) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Returns `true` if `id` occurs in the indexed sequence.
    #[inline(always)]
    pub fn contains(&self, id: &K) -> bool {
        self.by_id.contains_key(id)
    }
}

/// Moves the element at `from` to `to`, shifting everything in between by
/// one slot.
///
/// This has the same outcome as swapping the element with its neighbor
/// `|from - to|` times.
pub fn relocate<T>(items: &mut [T], from: usize, to: usize) {
    if from > to {
        items[to..=from].rotate_right(1);
    } else if from < to {
        items[from..=to].rotate_left(1);
    }
}

#[test]
fn test_id_index_first_match() {
    let idx = IdIndex::new(vec![&'a', &'b', &'a', &'c']);
    assert_eq!(idx.get(&'a'), Some(0));
    assert_eq!(idx.get(&'c'), Some(3));
    assert_eq!(idx.get(&'z'), None);
    assert!(idx.contains(&'b'));
}

#[test]
fn test_relocate() {
    let mut v = vec![0, 1, 2, 3, 4];
    relocate(&mut v, 4, 1);
    assert_eq!(v, vec![0, 4, 1, 2, 3]);
    relocate(&mut v, 0, 3);
    assert_eq!(v, vec![4, 1, 2, 0, 3]);
    relocate(&mut v, 2, 2);
    assert_eq!(v, vec![4, 1, 2, 0, 3]);
}
