//! This crate computes edit scripts between two ordered snapshots of
//! identity bearing records.
//!
//! Given an "old" and an "updated" sequence of [`Record`]s it works out
//! which records were added, deleted, changed and moved.  Unlike a textual
//! diff it never compares records by content to decide whether they are the
//! same: records are the same if their ids are equal.  A record whose id
//! survives but whose payload differs is reported as changed, independent of
//! whether it also moved.
//!
//! ```rust
//! use recdiff::{diff_records, EditOp, Record};
//!
//! let old = vec![
//!     Record::new(1, "a", 0),
//!     Record::new(2, "b", 1),
//!     Record::new(3, "c", 2),
//! ];
//! let new = vec![
//!     Record::new(3, "c", 0),
//!     Record::new(1, "a", 1),
//!     Record::new(2, "b", 2),
//! ];
//! let script = diff_records(&old, &new).unwrap();
//! assert_eq!(script.moved(), &[EditOp::Moved {
//!     value: Record::new(3, "c", 0),
//!     from_position: 2,
//!     to_position: 0,
//! }][..]);
//! assert_eq!(script.apply(&old), new);
//! ```
//!
//! The crate is split into a few levels:
//!
//! * [`algorithms`]: the low level algorithm reporting operations to an
//!   [`EditHook`](algorithms::EditHook) as they are discovered.
//! * [`diff_records`] and [`DiffConfig`]: validate the inputs and capture
//!   the operations into an [`EditScript`].
//! * [`utils`]: helpers for getting sequences into the sorted shape the
//!   differ expects.
//! * [`text`]: renders an [`EditScript`] as a human readable prescription.
//!
//! # Features
//!
//! * `text`: enables the [`text`] module.  On by default.
//! * `serde`: implements `Serialize` and `Deserialize` for the result types.
pub mod algorithms;
pub mod text;
pub mod utils;

mod common;
mod error;
mod types;

pub use self::common::*;
pub use self::error::*;
pub use self::types::*;

#[cfg(feature = "text")]
pub use self::text::prescription;
