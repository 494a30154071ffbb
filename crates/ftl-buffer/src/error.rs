//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while reserving buffer storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not provide the requested block, or the block
    /// size in bytes does not fit the address space.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                requested,
                element_size,
            } => {
                write!(
                    f,
                    "allocation failed: {requested} slots of {element_size} bytes"
                )
            }
        }
    }
}

impl Error for BufferError {}
