use std::fmt;

/// Identifies one of the two compared sequences.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Side {
    /// The old sequence.
    Old,
    /// The updated sequence.
    Updated,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Side::Old => "old",
            Side::Updated => "updated",
        })
    }
}

/// Reasons for refusing to diff two sequences.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum DiffError {
    /// Two records of the same sequence share an id.
    #[error("{side} sequence repeats the id at index {first} at index {second}")]
    DuplicateId {
        side: Side,
        first: usize,
        second: usize,
    },
    /// A record's position does not match its index.
    #[error("{side} sequence is not sorted: record at index {index} claims position {position}")]
    PositionMismatch {
        side: Side,
        index: usize,
        position: usize,
    },
}

#[test]
fn test_error_messages() {
    let err = DiffError::DuplicateId {
        side: Side::Old,
        first: 0,
        second: 2,
    };
    assert_eq!(
        err.to_string(),
        "old sequence repeats the id at index 0 at index 2"
    );
    let err = DiffError::PositionMismatch {
        side: Side::Updated,
        index: 1,
        position: 4,
    };
    assert_eq!(
        err.to_string(),
        "updated sequence is not sorted: record at index 1 claims position 4"
    );
}
