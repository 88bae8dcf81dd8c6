//! Error types for saw_pivot.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PivotError {
    #[error("Unsupported lattice dimension: {0} (expected 2 or 3)")]
    UnsupportedDimension(usize),

    #[error("Invalid walk length: {len} coordinates do not form whole {dimensions}-d points")]
    InvalidLength { len: usize, dimensions: usize },

    #[error("Dimension mismatch: walk is {walk}-d but {requested}-d was requested")]
    DimensionMismatch { walk: usize, requested: usize },

    #[error("Walk is not self-avoiding: point {index} revisits an earlier site")]
    SelfIntersecting { index: usize },

    #[error(
        "Invalid pivot move: index {index} (walk of {len} points), element {element} (group of {group_size})"
    )]
    InvalidMove {
        index: usize,
        element: usize,
        len: usize,
        group_size: usize,
    },
}

pub type Result<T> = std::result::Result<T, PivotError>;
