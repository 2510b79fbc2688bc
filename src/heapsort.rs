//! Heapsort
//!
//! Treats the front of the slice as an implicit binary max-heap: the root is
//! at index 0 and the parent of index `i` is at `(i - 1) / 2`. Each round
//! rebuilds heap order over the whole active range by sifting every element
//! up, moves the root (the maximum) to the end of the range, and shrinks the
//! range by one.
//!
//! Rebuilding the full range every round, rather than sifting down only the
//! element that replaced the root, makes this O(n²) overall. Not stable.

use crate::array::swap;

#[inline(always)]
fn parent(i: usize) -> usize {
    (i - 1) >> 1
}

/// Sort a slice in-place using heapsort.
pub fn sort(data: &mut [i32]) {
    let mut end = data.len();

    while end > 0 {
        heapify(&mut data[..end]);
        swap(data, 0, end - 1);
        end -= 1;
    }
}

/// Establish max-heap order over `heap` by sifting each element up past
/// every smaller ancestor.
fn heapify(heap: &mut [i32]) {
    for i in 1..heap.len() {
        let value = heap[i];
        let mut j = i;
        while j > 0 && value > heap[parent(j)] {
            let k = parent(j);
            swap(heap, j, k);
            j = k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::is_sorted;
    use rand::Rng;

    fn is_max_heap(heap: &[i32]) -> bool {
        (1..heap.len()).all(|i| heap[parent(i)] >= heap[i])
    }

    #[test]
    fn test_parent_index() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(3), 1);
        assert_eq!(parent(4), 1);
        assert_eq!(parent(6), 2);
    }

    #[test]
    fn test_heapify() {
        let mut rng = rand::thread_rng();
        let mut heap: Vec<i32> = (0..257).map(|_| rng.gen_range(-100..100)).collect();
        let max = *heap.iter().max().unwrap();
        heapify(&mut heap);
        assert!(is_max_heap(&heap));
        assert_eq!(heap[0], max);
    }

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
    fn test_sort_all_same() {
        let mut data = vec![42; 100];
        sort(&mut data);
        assert!(data.iter().all(|&x| x == 42));
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..2000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
