//! Linked containers for ftl.
//!
//! - [`Stack`]: singly linked LIFO stack.
//! - [`List`]: doubly linked list addressed through [`Position`] handles,
//!   with constant-time erase at any position.
//!
//! Both are written without `unsafe`. The list keeps its nodes in a slot
//! arena, so positions are indices tagged with a generation and a stale
//! position is detected instead of dereferenced.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod list;
pub mod stack;

pub use error::ListError;
pub use list::{List, Position};
pub use stack::Stack;
