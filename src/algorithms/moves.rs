//! Greedy move resolution.
//!
//! Once adds and deletes have been simulated the working copy is a
//! permutation of the updated sequence.  The resolver repeatedly measures
//! how far every record is from its target index, relocates the record that
//! is furthest away and measures again until every record is in place.
//!
//! Picking works on the shifts in updated sequence order: a candidate wins
//! over the current pick if its shift is larger, or equally large and
//! pointing [`Direction::Up`].  For equal shifts this means the last upwards
//! candidate is chosen, or the first one if none of them points upwards.
//! This ordering is observable through the emitted operations.
use std::hash::Hash;

use log::trace;

use crate::algorithms::hook::EditHook;
use crate::algorithms::simulate::WorkingCopy;
use crate::algorithms::utils::{relocate, IdIndex};
use crate::types::Record;

/// The direction a record needs to travel in.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    /// Towards the start of the sequence.
    Up,
    /// Towards the end of the sequence.
    Down,
    /// The record is in place.
    None,
}

/// The distance between where a record is and where it belongs.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Shift {
    /// Index of the record in the updated sequence.
    pub target: usize,
    /// Index of the record in the working copy.
    pub current: usize,
    /// Absolute distance between `current` and `target`.
    pub distance: usize,
    /// The direction to travel in.
    pub direction: Direction,
}

impl Shift {
    fn new(target: usize, current: usize) -> Shift {
        let direction = if target < current {
            Direction::Up
        } else if target > current {
            Direction::Down
        } else {
            Direction::None
        };
        Shift {
            target,
            current,
            distance: if target < current {
                current - target
            } else {
                target - current
            },
            direction,
        }
    }

    /// Returns the index the record lands on when moved by this shift.
    pub fn destination(&self) -> usize {
        match self.direction {
            Direction::Up => self.current - self.distance,
            Direction::Down => self.current + self.distance,
            Direction::None => self.current,
        }
    }
}

/// Computes the shift of every record of `new` against the working copy.
///
/// The result is in updated sequence order.
///
/// # Panics
///
/// Panics if an id of `new` is missing from `working`.  This can only happen
/// if the working copy was not built from the same pair of sequences.
pub fn compute_shifts<K, V>(working: &[&K], new: &[Record<K, V>]) -> Vec<Shift>
where
    K: Hash + Eq,
{
    let current = IdIndex::new(working.iter().copied());
    new.iter()
        .enumerate()
        .map(|(target, record)| match current.get(&record.id) {
            Some(idx) => Shift::new(target, idx),
            None => panic!(
                "record at index {} of the updated sequence is missing from the working copy",
                target
            ),
        })
        .collect()
}

/// Returns `true` if any record is out of place.
pub fn has_shifts(shifts: &[Shift]) -> bool {
    shifts.iter().any(|shift| shift.distance != 0)
}

/// Picks the shift to resolve next, or `None` if everything is in place.
pub fn pick_shift(shifts: &[Shift]) -> Option<&Shift> {
    if !has_shifts(shifts) {
        return None;
    }
    let mut highest = &shifts[0];
    for shift in &shifts[1..] {
        if shift.distance > highest.distance
            || (shift.distance == highest.distance && shift.direction == Direction::Up)
        {
            highest = shift;
        }
    }
    Some(highest)
}

/// Relocates records in `working` until it matches the order of `new`.
///
/// Every relocation is reported to the hook as a move of the record as it
/// appears in `new`.  Positions are indices in the working copy at the time
/// of the move.
pub fn resolve<K, V, D>(
    d: &mut D,
    working: &mut WorkingCopy<'_, K>,
    new: &[Record<K, V>],
) -> Result<(), D::Error>
where
    K: Hash + Eq,
    D: EditHook<K, V>,
{
    assert_eq!(
        working.len(),
        new.len(),
        "working copy and updated sequence differ in length"
    );

    let mut rounds = 0usize;
    loop {
        let shifts = compute_shifts(working.ids(), new);
        let shift = match pick_shift(&shifts) {
            Some(shift) => *shift,
            None => break,
        };
        let to = shift.destination();
        trace!(
            "moving record {} from {} to {} (shift {:?})",
            shift.target,
            shift.current,
            to,
            shift.direction
        );
        relocate(working.ids_mut(), shift.current, to);
        d.moved(&new[shift.target], shift.current, to)?;
        rounds += 1;
    }
    trace!("moves resolved after {} rounds", rounds);
    Ok(())
}

#[cfg(test)]
fn resolve_ids(working: &[u32], new: &[u32]) -> Vec<(u32, usize, usize)> {
    let new = new
        .iter()
        .enumerate()
        .map(|(idx, &id)| Record::new(id, (), idx))
        .collect::<Vec<_>>();
    let mut wc = WorkingCopy::new(&new);
    *wc.ids_mut() = working.iter().collect();
    let mut d = crate::algorithms::Capture::new();
    resolve(&mut d, &mut wc, &new).unwrap();
    let expected = new.iter().map(|r| &r.id).collect::<Vec<_>>();
    assert_eq!(wc.ids(), &expected[..]);
    d.into_script()
        .moved()
        .iter()
        .map(|op| match op {
            crate::types::EditOp::Moved {
                value,
                from_position,
                to_position,
            } => (value.id, *from_position, *to_position),
            _ => unreachable!(),
        })
        .collect()
}

#[test]
fn test_shift_directions() {
    let new = vec![Record::new(3, (), 0), Record::new(1, (), 1), Record::new(2, (), 2)];
    let shifts = compute_shifts(&[&1, &2, &3], &new);
    assert_eq!(shifts[0].direction, Direction::Up);
    assert_eq!(shifts[0].distance, 2);
    assert_eq!(shifts[0].destination(), 0);
    assert_eq!(shifts[1].direction, Direction::Down);
    assert_eq!(shifts[2].direction, Direction::Down);
    assert!(has_shifts(&shifts));
    assert!(!has_shifts(&compute_shifts(&[&3, &1, &2], &new)));
}

#[test]
fn test_pick_prefers_last_up_on_ties() {
    let shifts = vec![Shift::new(1, 0), Shift::new(0, 1), Shift::new(3, 2), Shift::new(2, 3)];
    assert_eq!(pick_shift(&shifts), Some(&Shift::new(2, 3)));
    let shifts = vec![Shift::new(0, 0), Shift::new(2, 1), Shift::new(3, 2)];
    assert_eq!(pick_shift(&shifts), Some(&Shift::new(2, 1)));
    assert_eq!(pick_shift(&[Shift::new(0, 0)]), None);
    assert_eq!(pick_shift(&[]), None);
}

#[test]
fn test_single_rotation() {
    assert_eq!(resolve_ids(&[1, 2, 3], &[3, 1, 2]), vec![(3, 2, 0)]);
}

#[test]
fn test_largest_first() {
    assert_eq!(
        resolve_ids(&[2, 3, 5, 6, 4], &[3, 2, 4, 5, 6]),
        vec![(4, 4, 2), (3, 1, 0)]
    );
}

#[test]
fn test_reverse() {
    assert_eq!(
        resolve_ids(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]),
        vec![(5, 4, 0), (4, 4, 1), (3, 4, 2), (2, 4, 3)]
    );
}

#[test]
fn test_adjacent_swaps() {
    assert_eq!(
        resolve_ids(&[1, 2, 3, 4, 5], &[2, 1, 4, 3, 5]),
        vec![(4, 3, 2), (2, 1, 0)]
    );
}

#[test]
fn test_in_place() {
    assert!(resolve_ids(&[1, 2, 3], &[1, 2, 3]).is_empty());
    assert!(resolve_ids(&[], &[]).is_empty());
}

#[test]
#[should_panic(expected = "missing from the working copy")]
fn test_missing_record_panics() {
    let new = vec![Record::new(1, (), 0)];
    compute_shifts(&[&2], &new);
}
