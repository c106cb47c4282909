//! Human readable rendering of edit scripts.
//!
//! This module renders an [`EditScript`] as an editorial prescription: one
//! line per operation describing what happens to which record.  Rendering
//! only needs the payload (and optionally the id) to implement
//! [`Display`](std::fmt::Display).
//!
//! Rendering is available by default but can be disabled by turning off the
//! default features.  The feature to enable to get it back is `text`.
//!
//! ```rust
//! use recdiff::{diff_records, Record};
//!
//! let old = vec![Record::new(1, "first", 0), Record::new(2, "second", 1)];
//! let new = vec![Record::new(2, "second", 0), Record::new(3, "third", 1)];
//! let script = diff_records(&old, &new).unwrap();
//! print!("{}", script.prescription());
//! ```
#![cfg(feature = "text")]
use std::fmt;
use std::hash::Hash;

mod render;

pub use self::render::Prescription;

use crate::common::diff_records;
use crate::error::DiffError;
use crate::types::{EditOp, EditScript, Record};

impl<K, V: fmt::Display> fmt::Display for EditOp<K, V> {
    /// Renders the operation as a single line without the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditOp::Added { value, position } => {
                write!(f, "{} added at position {}", value.value, position)
            }
            EditOp::Deleted { value, position } => {
                write!(f, "{} deleted from position {}", value.value, position)
            }
            EditOp::Changed {
                old_value,
                new_value,
                position,
            } => write!(
                f,
                "{} changed to {} at position {}",
                old_value.value, new_value.value, position
            ),
            EditOp::Moved {
                value,
                from_position,
                to_position,
            } => write!(
                f,
                "{} moved from position {} to {}",
                value.value, from_position, to_position
            ),
        }
    }
}

impl<K, V> EditScript<K, V> {
    /// Returns a renderer for the editorial prescription of this script.
    pub fn prescription(&self) -> Prescription<'_, K, V> {
        Prescription::from_script(self)
    }
}

/// Quick way to get the editorial prescription between two sequences.
pub fn prescription<K, V>(old: &[Record<K, V>], new: &[Record<K, V>]) -> Result<String, DiffError>
where
    K: Hash + Eq + Clone + fmt::Display,
    V: PartialEq + Clone + fmt::Display,
{
    Ok(diff_records(old, new)?.prescription().to_string())
}

#[test]
fn test_op_display() {
    let op = EditOp::Moved {
        value: Record::new(3, "third", 0),
        from_position: 2,
        to_position: 0,
    };
    assert_eq!(op.to_string(), "third moved from position 2 to 0");
}

#[test]
fn test_quick_prescription() {
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
    insta::assert_snapshot!(prescription(&old, &new).unwrap(), @r###"
    fifth added at position 3
    sixth added at position 4
    first deleted from position 0
    second changed to second_new at position 1
    fourth moved from position 4 to 2
    third moved from position 1 to 0
    "###);
}
