//! Shared Array Primitives
//!
//! The swap used by every comparison sort, plus the helpers the driver uses
//! to verify and print an array.

use std::fmt::{self, Write};

#[cfg(test)]
thread_local! {
    static SWAPS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

#[cfg(test)]
pub(crate) fn reset_swap_count() {
    SWAPS.with(|swaps| swaps.set(0));
}

/// Swaps performed on this thread since the last reset
#[cfg(test)]
pub(crate) fn swap_count() -> usize {
    SWAPS.with(|swaps| swaps.get())
}

/// Exchange the elements at `i` and `j`.
///
/// Both indices must be in `0..data.len()`. This is a caller contract: debug
/// builds assert it, release builds rely on slice indexing to panic instead
/// of touching memory outside the array.
#[inline(always)]
pub fn swap<T>(data: &mut [T], i: usize, j: usize) {
    debug_assert!(
        i < data.len() && j < data.len(),
        "swap index out of range: ({}, {}) for length {}",
        i,
        j,
        data.len()
    );
    data.swap(i, j);
    #[cfg(test)]
    SWAPS.with(|swaps| swaps.set(swaps.get() + 1));
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// The first adjacent pair found out of ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inversion {
    /// Index of the left element of the pair
    pub index: usize,
    pub left: i32,
    pub right: i32,
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arr[{}] = {}, arr[{}] = {}",
            self.index,
            self.left,
            self.index + 1,
            self.right
        )
    }
}

/// Scan for the first adjacent inversion, or `None` if the slice is sorted.
pub fn first_inversion(data: &[i32]) -> Option<Inversion> {
    data.windows(2)
        .position(|w| w[0] > w[1])
        .map(|index| Inversion {
            index,
            left: data[index],
            right: data[index + 1],
        })
}

/// Render an array as `[ a, b, c ]`, or `[ ]` when empty.
pub fn format_array(data: &[i32]) -> String {
    let mut output = String::with_capacity(data.len() * 4 + 4);
    output.push('[');
    if let Some((first, rest)) = data.split_first() {
        let _ = write!(output, " {}", first);
        for value in rest {
            let _ = write!(output, ", {}", value);
        }
    }
    output.push_str(" ]");
    output
}
