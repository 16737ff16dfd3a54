use std::fmt;

/// the dimension an out-of-bounds index was addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

pub type DfResult<T> = std::result::Result<T, DfError>;

/// Errors raised by [`crate::df::Column`] and [`crate::df::DataFrame`].
///
/// All of them are raised before any mutation is made, so a failed call
/// always leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DfError {
    /// a row or column index is outside `[0, len)` (or `[0, len]` for insertion points)
    #[error("{axis} index {index} is out of bounds (len = {len})")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },

    /// the requested cell type does not match the column, or two frames do not line up
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// the equal-length invariant would be (or has been) broken
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("unknown column type '{0}'")]
    UnknownColumnType(String),
}

impl DfError {
    pub(crate) fn row(index: usize, len: usize) -> Self {
        DfError::IndexOutOfBounds {
            axis: Axis::Row,
            index,
            len,
        }
    }

    pub(crate) fn column(index: usize, len: usize) -> Self {
        DfError::IndexOutOfBounds {
            axis: Axis::Column,
            index,
            len,
        }
    }

    pub(crate) fn type_mismatch(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        DfError::TypeMismatch(format!("expected `{expected}` column, found `{actual}`"))
    }

    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, DfError::IndexOutOfBounds { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DfError::TypeMismatch(_))
    }
}
