use recdiff::{diff_records, EditOp, Record};

fn seq(items: &[(u32, &'static str)]) -> Vec<Record<u32, &'static str>> {
    items
        .iter()
        .enumerate()
        .map(|(position, &(id, value))| Record::new(id, value, position))
        .collect()
}

#[test]
fn test_full_delete() {
    let old = seq(&[(1, "first"), (2, "second"), (3, "third")]);
    let script = diff_records(&old, &[]).unwrap();
    assert_eq!(
        script.deleted(),
        &[
            EditOp::Deleted {
                value: Record::new(1, "first", 0),
                position: 0,
            },
            EditOp::Deleted {
                value: Record::new(2, "second", 1),
                position: 1,
            },
            EditOp::Deleted {
                value: Record::new(3, "third", 2),
                position: 2,
            },
        ][..]
    );
    assert!(script.added().is_empty());
    assert!(script.changed().is_empty());
    assert!(script.moved().is_empty());
}

#[test]
fn test_full_add() {
    let new = seq(&[(1, "first"), (2, "second"), (3, "third")]);
    let script = diff_records(&[], &new).unwrap();
    let added = script
        .added()
        .iter()
        .map(|op| match op {
            EditOp::Added { value, position } => (value.id, *position),
            _ => unreachable!(),
        })
        .collect::<Vec<_>>();
    assert_eq!(added, vec![(1, 0), (2, 1), (3, 2)]);
    assert_eq!(script.len(), 3);
}

#[test]
fn test_change_without_reorder() {
    let old = seq(&[(1, "a"), (2, "b"), (3, "c")]);
    let new = seq(&[(1, "a"), (2, "X"), (3, "c")]);
    let script = diff_records(&old, &new).unwrap();
    assert_eq!(
        script.changed(),
        &[EditOp::Changed {
            old_value: Record::new(2, "b", 1),
            new_value: Record::new(2, "X", 1),
            position: 1,
        }][..]
    );
    assert_eq!(script.len(), 1);
}

#[test]
fn test_reorder_without_change() {
    let old = seq(&[(1, "a"), (2, "b"), (3, "c")]);
    let new = seq(&[(3, "c"), (1, "a"), (2, "b")]);
    let script = diff_records(&old, &new).unwrap();
    assert_eq!(
        script.moved(),
        &[EditOp::Moved {
            value: Record::new(3, "c", 0),
            from_position: 2,
            to_position: 0,
        }][..]
    );
    assert_eq!(script.len(), 1);
}

#[test]
fn test_same() {
    let old = seq(&[(1, "first"), (2, "second"), (3, "third")]);
    assert!(diff_records(&old, &old.clone()).unwrap().is_empty());
}

#[test]
fn test_combined() {
    let old = seq(&[(1, "first"), (2, "second"), (3, "third"), (4, "fourth")]);
    let new = seq(&[
        (3, "third"),
        (2, "second_new"),
        (4, "fourth"),
        (5, "fifth"),
        (6, "sixth"),
    ]);
    let script = diff_records(&old, &new).unwrap();

    assert_eq!(
        script.deleted(),
        &[EditOp::Deleted {
            value: Record::new(1, "first", 0),
            position: 0,
        }][..]
    );
    assert_eq!(
        script.changed(),
        &[EditOp::Changed {
            old_value: Record::new(2, "second", 1),
            new_value: Record::new(2, "second_new", 1),
            position: 1,
        }][..]
    );
    assert_eq!(
        script.added(),
        &[
            EditOp::Added {
                value: Record::new(5, "fifth", 3),
                position: 3,
            },
            EditOp::Added {
                value: Record::new(6, "sixth", 4),
                position: 4,
            },
        ][..]
    );
    assert_eq!(
        script.moved(),
        &[
            EditOp::Moved {
                value: Record::new(4, "fourth", 2),
                from_position: 4,
                to_position: 2,
            },
            EditOp::Moved {
                value: Record::new(3, "third", 0),
                from_position: 1,
                to_position: 0,
            },
        ][..]
    );
    assert_eq!(script.apply(&old), new);
}

#[test]
fn test_changed_and_moved() {
    let old = seq(&[(1, "a"), (2, "b"), (3, "c")]);
    let new = seq(&[(3, "C"), (2, "b"), (1, "a")]);
    let script = diff_records(&old, &new).unwrap();
    assert_eq!(script.changed().len(), 1);
    assert_eq!(script.changed()[0].id(), &3);
    let moved = script.moved().iter().map(|op| *op.id()).collect::<Vec<_>>();
    assert_eq!(moved, vec![3, 2]);
    assert_eq!(script.apply(&old), new);
}

#[test]
fn test_deletions_at_both_ends() {
    let old = seq(&[(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
    let new = seq(&[(2, "b"), (3, "c")]);
    let script = diff_records(&old, &new).unwrap();
    let deleted = script
        .deleted()
        .iter()
        .map(|op| match op {
            EditOp::Deleted { value, position } => (value.id, *position),
            _ => unreachable!(),
        })
        .collect::<Vec<_>>();
    assert_eq!(deleted, vec![(1, 0), (4, 3)]);
    assert!(script.moved().is_empty());
}

#[test]
fn test_interleaved_adds() {
    let old = seq(&[(1, "a"), (2, "b")]);
    let new = seq(&[(3, "x"), (2, "b"), (4, "y"), (1, "a")]);
    let script = diff_records(&old, &new).unwrap();
    let moved = script
        .moved()
        .iter()
        .map(|op| match op {
            EditOp::Moved {
                value,
                from_position,
                to_position,
            } => (value.id, *from_position, *to_position),
            _ => unreachable!(),
        })
        .collect::<Vec<_>>();
    assert_eq!(moved, vec![(2, 3, 1), (4, 3, 2)]);
    assert_eq!(script.apply(&old), new);
}

#[test]
fn test_string_ids() {
    let old = vec![
        Record::new("home".to_string(), "Main St 1", 0),
        Record::new("work".to_string(), "Market Sq 5", 1),
    ];
    let new = vec![
        Record::new("work".to_string(), "Market Sq 5", 0),
        Record::new("home".to_string(), "Main St 2", 1),
    ];
    let script = diff_records(&old, &new).unwrap();
    assert_eq!(script.changed().len(), 1);
    assert_eq!(script.moved().len(), 1);
    assert_eq!(script.apply(&old), new);
}
