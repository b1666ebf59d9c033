//! Shared error types for the creel container crates.
//!
//! This is the leaf crate with zero internal dependencies. Every fallible
//! container operation in the workspace reports failure through
//! [`ArrayError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::ArrayError;
