//! Error types for matrix construction and arithmetic.

use std::error::Error;
use std::fmt;

use ftl_buffer::BufferError;

/// Errors from matrix construction, assignment, and element-wise arithmetic.
///
/// All three are reported before either operand is modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Shapes that must agree do not: a ragged row during construction,
    /// or operands of different dimensions in an element-wise operation.
    ShapeMismatch {
        /// What disagreed, e.g. `"row 1 has 2 columns, expected 3"`.
        detail: String,
    },
    /// `rows * columns` does not fit in `usize`.
    Overflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// The backing storage could not be reserved.
    Allocation(BufferError),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { detail } => write!(f, "shape mismatch: {detail}"),
            Self::Overflow { rows, columns } => {
                write!(f, "matrix size overflow: {rows} rows x {columns} columns")
            }
            Self::Allocation(e) => write!(f, "matrix storage: {e}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BufferError> for MatrixError {
    fn from(e: BufferError) -> Self {
        Self::Allocation(e)
    }
}
