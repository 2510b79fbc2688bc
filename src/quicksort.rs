//! Quicksort
//!
//! Last-element pivot with a two-cursor partition. After each partition the
//! smaller side is sorted recursively and the larger side is handled by the
//! next iteration of the loop, so recursion depth stays within O(log n) even
//! on inputs that drive the total work to O(n²).

use crate::array::swap;

/// Sort a slice in-place using quicksort.
pub fn sort(data: &mut [i32]) {
    sort_with_depth(data, 1);
}

/// Sort `data` as a call at recursion level `depth`, returning the deepest
/// level reached.
fn sort_with_depth(data: &mut [i32], depth: usize) -> usize {
    let mut max_depth = depth;
    let mut start = 0;
    let mut len = data.len();

    while len > 1 {
        let pivot = partition(&mut data[start..start + len]);

        if pivot > len - pivot {
            let right = start + pivot + 1;
            let right_len = len - pivot - 1;
            max_depth = max_depth.max(sort_with_depth(&mut data[right..right + right_len], depth + 1));
            len = pivot;
        } else {
            max_depth = max_depth.max(sort_with_depth(&mut data[start..start + pivot], depth + 1));
            start += pivot + 1;
            len -= pivot + 1;
        }
    }

    max_depth
}

/// Partition around the last element and return the pivot's final index.
///
/// On return every element before the index is `<=` the pivot and every
/// element after it is `>=` the pivot. Requires `data.len() >= 2`.
pub fn partition(data: &mut [i32]) -> usize {
    debug_assert!(data.len() >= 2, "partition requires at least two elements");

    let pivot = data.len() - 1;
    let pivot_value = data[pivot];
    let mut left = 0;
    let mut right = data.len() - 2;

    while left < right {
        while left < right && data[left] < pivot_value {
            left += 1;
        }
        while right > left && data[right] >= pivot_value {
            right -= 1;
        }
        if left < right {
            swap(data, left, right);
            left += 1;
            right -= 1;
        }
    }

    if data[left] < pivot_value {
        left += 1;
    }
    swap(data, left, pivot);
    left
}
