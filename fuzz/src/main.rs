#![allow(clippy::all)]

use std::collections::BTreeSet;

use afl::fuzz;
use arbitrary::Arbitrary;
use recdiff::{DiffConfig, Record};

#[derive(Arbitrary, Debug)]
struct FuzzOptions {
    check_positions: bool,
    old: Vec<(u8, u8)>,
    new: Vec<(u8, u8)>,
}

fn records(items: &[(u8, u8)]) -> Vec<Record<u8, u8>> {
    let mut seen = BTreeSet::new();
    items
        .iter()
        .filter(|(id, _)| seen.insert(*id))
        .enumerate()
        .map(|(position, &(id, value))| Record::new(id, value, position))
        .collect()
}

fn main() {
    fuzz!(|data: FuzzOptions| {
        let old = records(&data.old);
        let new = records(&data.new);
        let script = DiffConfig::new()
            .check_positions(data.check_positions)
            .diff(&old, &new)
            .unwrap();
        assert_eq!(script.apply(&old), new);
    });
}
