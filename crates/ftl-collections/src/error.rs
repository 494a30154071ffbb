//! Error types for position-based list operations.

use std::error::Error;
use std::fmt;

/// Errors from [`List`](crate::List) operations that take a
/// [`Position`](crate::Position).
///
/// The list is left unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The operation needs an element but was given `end()`.
    EndPosition,
    /// Stepping backwards from the first element.
    BeforeBegin,
    /// The position's element has been removed, or the position came from
    /// another list.
    StalePosition {
        /// Slot index carried by the position.
        index: usize,
    },
    /// `last` is not reachable from `first` by stepping forwards.
    InvalidRange,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndPosition => write!(f, "position is end(), which holds no element"),
            Self::BeforeBegin => write!(f, "no position before the first element"),
            Self::StalePosition { index } => {
                write!(f, "position at slot {index} no longer refers to an element")
            }
            Self::InvalidRange => write!(f, "range end is not reachable from its start"),
        }
    }
}

impl Error for ListError {}
