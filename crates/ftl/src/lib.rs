//! ftl: from-scratch containers and algorithms.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the ftl sub-crates. Adding `ftl` as a single dependency is enough for
//! most users.
//!
//! # Quick start
//!
//! ```rust
//! use ftl::prelude::*;
//!
//! let mut m = Matrix::from_row_major(3, 3, 1..=9).unwrap();
//! assert_eq!(m[1][1], 5);
//! assert_eq!(distance(&m.begin(), &m.end()), 9);
//!
//! let doubled = &m + &m;
//! let copy = m.clone();
//! m += &copy;
//! assert_eq!(m, doubled);
//!
//! quick_sort(m.as_mut_slice());
//! assert_eq!(m[0], [2, 4, 6]);
//!
//! let mut list: List<i32> = m.iter().copied().collect();
//! let after = list.erase(list.begin()).unwrap();
//! assert_eq!(list.get(after), Some(&4));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `ftl-buffer` | Fixed-capacity element storage |
//! | [`matrix`] | `ftl-matrix` | `Matrix`, `Shape`, contiguous cursors |
//! | [`collections`] | `ftl-collections` | `Stack`, `List`, `Position` |
//! | [`algorithms`] | `ftl-algorithms` | Sorts and substring search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fixed-capacity element storage (`ftl-buffer`).
///
/// [`buffer::StorageBuffer`] separates reserving slots from constructing
/// elements in them; the matrix is built on it.
pub use ftl_buffer as buffer;

/// Dense matrix and random-access cursors (`ftl-matrix`).
///
/// [`matrix::Matrix`] with [`matrix::ContiguousIter`] /
/// [`matrix::ContiguousIterMut`] cursors and element-wise arithmetic.
pub use ftl_matrix as matrix;

/// Linked containers (`ftl-collections`).
pub use ftl_collections as collections;

/// Sorting and searching (`ftl-algorithms`).
pub use ftl_algorithms as algorithms;

/// Common imports for typical ftl usage.
///
/// ```rust
/// use ftl::prelude::*;
/// ```
pub mod prelude {
    // Matrix and cursors
    pub use ftl_matrix::{
        advance, distance, ContiguousIter, ContiguousIterMut, Matrix, RandomAccessCursor, Shape,
    };

    // Collections
    pub use ftl_collections::{List, Position, Stack};

    // Algorithms
    pub use ftl_algorithms::{bubble_sort, find_all, merge_sort, quick_sort, CaseSensitivity};

    // Errors
    pub use ftl_buffer::BufferError;
    pub use ftl_collections::ListError;
    pub use ftl_matrix::MatrixError;
}
