//! Integer Array Sorting
//!
//! Six classic sorting algorithms over `i32` slices, all operating in place:
//! - **Selection Sort**: O(n²) comparisons, O(n) swaps, not stable
//! - **Insertion Sort**: O(n²) worst case, adaptive, stable
//! - **Merge Sort**: O(n log n), O(n) merge buffer, stable
//! - **Quicksort**: O(n log n) average, recursion depth bounded to O(log n)
//! - **Heapsort**: array-backed binary heap, re-heapified every round
//! - **Radix LSD Sort**: four byte-wise counting sort passes, stable
//!
//! Every comparison sort moves elements through [`array::swap`]. The
//! [`algorithm::Algorithm`] enum ties them together for the driver, the
//! benchmarks and the cross-algorithm tests.

pub mod algorithm;
pub mod array;
pub mod error;
pub mod heapsort;
pub mod insertion_sort;
pub mod lino_report;
pub mod merge_sort;
pub mod permutation;
pub mod quicksort;
pub mod radix_lsd_sort;
pub mod selection_sort;

pub use algorithm::Algorithm;
pub use array::{first_inversion, is_sorted, Inversion};
pub use error::DriverError;
