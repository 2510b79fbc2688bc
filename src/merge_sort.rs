//! Merge Sort
//!
//! Top-down recursive merge sort. Halves are sorted in place and then merged
//! through a buffer sized to the merged span; the merge is skipped entirely
//! when the two halves are already in order across the midpoint.
//!
//! Complexity: O(n log n) comparisons, O(log n) recursion depth. Stable.

use crate::array::swap;

#[cfg(test)]
thread_local! {
    static MERGES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Sort a slice in-place using merge sort.
pub fn sort(data: &mut [i32]) {
    sort_by_key(data, &|&value| value);
}

/// Stable merge sort of arbitrary `Copy` records by an `i32` key.
pub(crate) fn sort_by_key<T, F>(data: &mut [T], key: &F)
where
    T: Copy,
    F: Fn(&T) -> i32,
{
    let len = data.len();
    match len {
        0 | 1 => {}
        2 => {
            if key(&data[0]) > key(&data[1]) {
                swap(data, 0, 1);
            }
        }
        _ => {
            let mid = len / 2;
            sort_by_key(&mut data[..mid], key);
            sort_by_key(&mut data[mid..], key);

            if key(&data[mid - 1]) > key(&data[mid]) {
                merge(data, mid, key);
            }
        }
    }
}

/// Merge the sorted runs `data[..mid]` and `data[mid..]`.
///
/// The right run only wins when its head is strictly less than the left
/// run's head, so equal keys keep their left-before-right order.
fn merge<T, F>(data: &mut [T], mid: usize, key: &F)
where
    T: Copy,
    F: Fn(&T) -> i32,
{
    #[cfg(test)]
    MERGES.with(|merges| merges.set(merges.get() + 1));

    let len = data.len();
    let mut merged = Vec::with_capacity(len);
    let mut j = 0;
    let mut k = mid;

    for _ in 0..len {
        if j >= mid || (k < len && key(&data[j]) > key(&data[k])) {
            merged.push(data[k]);
            k += 1;
        } else {
            merged.push(data[j]);
            j += 1;
        }
    }

    data.copy_from_slice(&merged);
}
