use std::fmt;

use thiserror::Error;

/// Which index of the sheet grid a request addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Frame,
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Frame => "frame",
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimError {
    /// Requested index lies outside `0..limit`
    #[error("{animator}: {kind} {requested} is out of range (valid: 0..{limit})")]
    OutOfRange {
        animator: String,
        kind: Axis,
        requested: usize,
        limit: usize,
    },
}

impl AnimError {
    pub(crate) fn out_of_range(animator: &str, kind: Axis, requested: usize, limit: usize) -> Self {
        let err = AnimError::OutOfRange {
            animator: animator.to_string(),
            kind,
            requested,
            limit,
        };
        log::warn!("{err}");
        err
    }

    /// The valid index range for the rejected request
    pub fn valid_range(&self) -> std::ops::Range<usize> {
        match self {
            AnimError::OutOfRange { limit, .. } => 0..*limit,
        }
    }
}
