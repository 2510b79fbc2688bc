//! Selection Sort
//!
//! For each position, scans the unsorted remainder for its minimum and swaps
//! it into place. O(n²) comparisons but at most n - 1 swaps. Not stable.

use crate::array::swap;

/// Sort a slice in-place using selection sort.
///
/// Ties resolve to the leftmost minimum: the scan only moves its candidate
/// on a strict improvement.
pub fn sort(data: &mut [i32]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut best = i;
        for j in i + 1..n {
            if data[best] > data[j] {
                best = j;
            }
        }
        swap(data, i, best);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i32> = vec![];
        sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42];
        sort(&mut data);
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_negative() {
        let mut data = vec![0, -7, i32::MAX, i32::MIN, 3];
        sort(&mut data);
        assert_eq!(data, vec![i32::MIN, -7, 0, 3, i32::MAX]);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
