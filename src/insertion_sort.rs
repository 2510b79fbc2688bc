//! Insertion Sort
//!
//! Grows a sorted prefix one element at a time, shifting larger elements
//! right to open a gap for the next one. Stable, and the only comparison
//! sort here whose cost adapts to presortedness: nearly sorted input runs
//! in close to linear time.

/// Sort a slice in-place using insertion sort.
pub fn sort(data: &mut [i32]) {
    sort_by_key(data, |&value| value);
}

/// Stable insertion sort of arbitrary `Copy` records by an `i32` key.
///
/// Only elements whose key is strictly greater than the held element's are
/// shifted, so equal keys never pass each other.
pub(crate) fn sort_by_key<T, F>(data: &mut [T], key: F)
where
    T: Copy,
    F: Fn(&T) -> i32,
{
    for i in 1..data.len() {
        let value = data[i];
        let value_key = key(&value);

        let mut j = i;
        while j > 0 && value_key < key(&data[j - 1]) {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = value;
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
    fn test_sort_sorted() {
        let mut data: Vec<i32> = (0..100).collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_smallest_last() {
        // Held element must travel all the way to index 0
        let mut data = vec![1, 2, 3, 4, -5];
        sort(&mut data);
        assert_eq!(data, vec![-5, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen_range(-50..50)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_by_key_stable() {
        let mut data = vec![(1, 'a'), (1, 'b'), (0, 'c')];
        sort_by_key(&mut data, |&(value, _)| value);
        assert_eq!(data, vec![(0, 'c'), (1, 'a'), (1, 'b')]);
    }

    #[test]
    fn test_sort_by_key_stable_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<(i32, usize)> = (0..500).map(|i| (rng.gen_range(0..10), i)).collect();
        let mut expected = data.clone();
        expected.sort_by_key(|&(value, _)| value);

        sort_by_key(&mut data, |&(value, _)| value);
        assert_eq!(data, expected);
    }
}
