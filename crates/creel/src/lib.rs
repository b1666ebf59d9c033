//! Array abstract data types with explicit, bounds-checked contracts.
//!
//! Three containers, leaves first:
//!
//! - [`FixedArray`]: a contiguous buffer of fixed length with bounds-checked
//!   access, bulk clear, and a restartable forward iterator.
//! - [`Array2D`]: `num_rows` independent [`FixedArray`] rows addressed by
//!   `(row, col)` pairs.
//! - [`DynamicArray`]: a resizable array over one [`FixedArray`] buffer that
//!   doubles its capacity on overflow, giving amortized O(1) append.
//!
//! Every slot is an explicit optional value — an empty slot is `None`, never
//! a sentinel of the element type — so iteration and equality stay
//! well-defined for any `T`.
//!
//! # Quick start
//!
//! ```rust
//! use creel::prelude::*;
//!
//! let mut values: DynamicArray<i32> = DynamicArray::new();
//! values.append(10);
//! values.append(20);
//! values.append(30);
//! assert_eq!(values.len(), 3);
//! assert_eq!(values.get(2), Ok(&30));
//!
//! values.remove(&20)?;
//! assert_eq!(values.len(), 2);
//! assert_eq!(values.get(1), Ok(&30));
//! assert_eq!(values.to_string(), "(10,30)");
//! # Ok::<(), creel::ArrayError>(())
//! ```
//!
//! # Concurrency
//!
//! All operations are synchronous and single-threaded. Each container owns
//! its buffer exclusively; callers needing cross-thread access must supply
//! their own mutual exclusion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dynamic;
pub mod fixed;
pub mod grid;

pub use creel_core::ArrayError;
pub use dynamic::DynamicArray;
pub use fixed::FixedArray;
pub use grid::Array2D;

/// Common imports for typical creel usage.
///
/// ```rust
/// use creel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dynamic::DynamicArray;
    pub use crate::fixed::FixedArray;
    pub use crate::grid::Array2D;
    pub use creel_core::ArrayError;
}
