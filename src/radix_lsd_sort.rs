//! Radix LSD Sort
//!
//! Least-significant-digit radix sort with a stable counting sort for each
//! digit. A digit is one byte, so 32-bit keys take four passes.
//!
//! Each pass snapshots the array, histograms the current byte, turns the
//! histogram into inclusive prefix sums and then walks the snapshot from the
//! back, decrementing the count for each element's byte to find its slot.
//! Walking backwards while decrementing keeps equal bytes in their input
//! order, which is what lets the next pass build on this one.
//!
//! Complexity: O(4 * (n + 256)) time, O(n) scratch. No comparisons.
//!
//! [`sort`] keys on the raw two's-complement bit pattern, so negative values
//! (top bit set) land after every non-negative value. [`sort_signed`] flips
//! the sign bit first and gives true signed order.

/// Number of bits per digit (radix)
const RADIX_BITS: usize = 8;
/// Number of buckets (2^RADIX_BITS)
const NUM_BUCKETS: usize = 1 << RADIX_BITS;
/// Mask for extracting a digit
const RADIX_MASK: u32 = (NUM_BUCKETS - 1) as u32;
/// Number of passes needed for 32-bit integers
const NUM_PASSES: usize = 32 / RADIX_BITS;

const SIGN_BIT: u32 = 1 << 31;

/// Sort a slice in-place by the unsigned byte pattern of each value.
///
/// Non-negative values come out ascending, followed by negative values
/// ascending: `[-1, 0, 1]` sorts to `[0, 1, -1]`.
pub fn sort(data: &mut [i32]) {
    sort_by_bits(data, |&value| value as u32);
}

/// Sort a slice in-place in signed ascending order.
pub fn sort_signed(data: &mut [i32]) {
    sort_by_bits(data, |&value| (value as u32) ^ SIGN_BIT);
}

#[inline(always)]
fn digit(bits: u32, pass: usize) -> usize {
    ((bits >> (pass * RADIX_BITS)) & RADIX_MASK) as usize
}

/// Stable LSD radix sort of arbitrary `Copy` records keyed by a `u32`.
pub(crate) fn sort_by_bits<T, F>(data: &mut [T], bits: F)
where
    T: Copy,
    F: Fn(&T) -> u32,
{
    if data.len() <= 1 {
        return;
    }

    let mut snapshot = data.to_vec();
    let mut counts = [0usize; NUM_BUCKETS];

    for pass in 0..NUM_PASSES {
        snapshot.copy_from_slice(data);

        counts.fill(0);
        for value in snapshot.iter() {
            counts[digit(bits(value), pass)] += 1;
        }

        // Inclusive prefix sums: counts[d] = number of elements with digit <= d
        for d in 1..NUM_BUCKETS {
            counts[d] += counts[d - 1];
        }

        for value in snapshot.iter().rev() {
            let d = digit(bits(value), pass);
            counts[d] -= 1;
            data[counts[d]] = *value;
        }
    }
}
