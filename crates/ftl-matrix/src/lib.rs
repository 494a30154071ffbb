//! Dense row-major matrix for ftl.
//!
//! [`Matrix`] owns one [`ftl_buffer::StorageBuffer`] and a validated
//! [`Shape`]. Elements are reached three ways:
//!
//! - `matrix[r][c]`: row slice, then column.
//! - [`Matrix::begin`] / [`Matrix::end`]: [`ContiguousIter`] cursors with
//!   pointer-style arithmetic (`end - begin == len`).
//! - [`Matrix::iter`] and friends: ordinary Rust iterators.
//!
//! ```
//! use ftl_matrix::Matrix;
//!
//! let m = Matrix::from_row_major(3, 3, 1..=9).unwrap();
//! assert_eq!(m[1][1], 5);
//! assert_eq!(m.end() - m.begin(), 9);
//! assert_eq!(*(m.begin() + 4), 5);
//! assert!(m.begin() + 5 == m.end() - 4);
//!
//! let twice = &m + &m;
//! assert_eq!(&twice - &m, m);
//! ```
//!
//! # Errors
//!
//! Construction and arithmetic report [`MatrixError`]: a shape mismatch,
//! an overflowing `rows * columns`, or a failed allocation. Out-of-range
//! indexing and dereferencing end cursors are caller bugs and panic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod matrix;
mod ops;
pub mod shape;

pub use cursor::{advance, distance, ContiguousIter, ContiguousIterMut, RandomAccessCursor};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use shape::Shape;
