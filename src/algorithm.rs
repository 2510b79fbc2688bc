//! Algorithm Selection
//!
//! One enum naming every sort in the crate, so the driver, the benchmarks and
//! the report can treat them uniformly.

use std::fmt;

use clap::ValueEnum;
use log::{debug, trace};

use crate::{heapsort, insertion_sort, merge_sort, quicksort, radix_lsd_sort, selection_sort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    /// Byte-wise LSD radix sort over the raw bit pattern
    Radix,
    /// LSD radix sort with the sign bit flipped, for signed order
    #[value(name = "radix_signed")]
    RadixSigned,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::RadixSigned,
    ];

    /// Sort `data` in place with this algorithm.
    pub fn sort(self, data: &mut [i32]) {
        debug!("{}: sorting {} elements", self, data.len());
        match self {
            Algorithm::Selection => selection_sort::sort(data),
            Algorithm::Insertion => insertion_sort::sort(data),
            Algorithm::Merge => merge_sort::sort(data),
            Algorithm::Quick => quicksort::sort(data),
            Algorithm::Heap => heapsort::sort(data),
            Algorithm::Radix => radix_lsd_sort::sort(data),
            Algorithm::RadixSigned => radix_lsd_sort::sort_signed(data),
        }
        trace!("{}: done", self);
    }

    /// Identifier used on the command line and in reports. Must agree with
    /// the `ValueEnum` names so printed names can be passed back to `-a`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
            Algorithm::RadixSigned => "radix_signed",
        }
    }

    /// Whether equal values keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion | Algorithm::Merge | Algorithm::Radix | Algorithm::RadixSigned
        )
    }

    /// Whether the algorithm takes O(n²) time on shuffled input.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Selection | Algorithm::Insertion | Algorithm::Heap
        )
    }

    /// Whether the output is in signed order for every input, including
    /// negative values.
    pub fn orders_negatives(self) -> bool {
        self != Algorithm::Radix
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
