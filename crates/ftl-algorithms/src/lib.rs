//! Comparison sorts and substring search for ftl.
//!
//! The sorts work in place on any `&mut [T]` with `T: PartialOrd`, so they
//! apply to vectors, arrays and matrix storage alike:
//!
//! ```
//! use ftl_algorithms::{bubble_sort, merge_sort, quick_sort};
//!
//! let mut v = vec![5, 3, 9, 1, 1, 0];
//! quick_sort(&mut v);
//! assert_eq!(v, [0, 1, 1, 3, 5, 9]);
//!
//! let mut words = ["pear", "fig", "apple"];
//! merge_sort(&mut words);
//! assert_eq!(words, ["apple", "fig", "pear"]);
//!
//! let mut floats = [2.5, -1.0, 0.0];
//! bubble_sort(&mut floats);
//! assert_eq!(floats, [-1.0, 0.0, 2.5]);
//! ```
//!
//! Elements that are unordered with respect to each other (NaN) do not
//! make the sorts loop or panic, but their final placement is
//! unspecified.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bubble;
pub mod merge;
pub mod quick;
pub mod search;

pub use bubble::bubble_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use search::{find_all, CaseSensitivity};
