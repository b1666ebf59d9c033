//! Workload builders shared by the creel benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use creel::DynamicArray;

/// Build a dynamic array holding `0..n` in order.
///
/// Starts from the default capacity of 1 so the build itself walks the
/// full doubling sequence.
pub fn filled_array(n: u64) -> DynamicArray<u64> {
    let mut array = DynamicArray::new();
    for v in 0..n {
        array.append(v);
    }
    array
}
