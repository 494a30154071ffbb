//! Fixed-capacity element storage for ftl containers.
//!
//! [`StorageBuffer`] reserves a block of element slots up front and lets
//! its owner construct and destruct elements over explicit index ranges.
//! The buffer itself has no notion of shape; containers such as
//! `ftl_matrix::Matrix` decide how the slots are interpreted.
//!
//! # Storage model
//!
//! ```text
//! StorageBuffer<T>
//! ├── capacity      fixed at creation, never changes
//! ├── constructed   number of live elements (a prefix of the slots)
//! └── slots
//!     [0, constructed)          live, dropped when the buffer is dropped
//!     [constructed, capacity)   reserved, no value
//! ```
//!
//! Every successful construction bumps the live count immediately, so a
//! `Clone` that panics halfway through a range leaves the buffer with
//! exactly the elements that were built, and dropping it releases them.
//!
//! The live prefix is tracked by index rather than by raw pointer, so the
//! crate contains no `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;

pub use buffer::StorageBuffer;
pub use error::BufferError;
