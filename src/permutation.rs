//! Input Generation
//!
//! Builds the driver's test input: the distinct values `0..len` in uniformly
//! random order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::DriverError;

/// Largest array the driver will build (values must fit in an `i32`).
pub const MAX_LEN: usize = i32::MAX as usize;

/// Allocate an array of `len` elements holding a uniformly shuffled
/// permutation of `0..len`.
///
/// Allocation failure is reported as [`DriverError::Allocation`] instead of
/// aborting the process.
pub fn init_array<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Vec<i32>, DriverError> {
    if len > MAX_LEN {
        return Err(DriverError::InvalidLength {
            requested: len.to_string(),
            max: MAX_LEN,
        });
    }

    let mut data = with_capacity(len)?;
    data.extend(0..len as i32);
    data.shuffle(rng);
    Ok(data)
}

/// Copy `data` into a fresh array, reporting allocation failure as
/// [`DriverError::Allocation`].
pub fn copy_array(data: &[i32]) -> Result<Vec<i32>, DriverError> {
    let mut copy = with_capacity(data.len())?;
    copy.extend_from_slice(data);
    Ok(copy)
}

fn with_capacity(len: usize) -> Result<Vec<i32>, DriverError> {
    let mut data: Vec<i32> = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| DriverError::Allocation { len })?;
    Ok(data)
}

/// Seeded generator for reproducible runs, or one seeded from OS entropy.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Build a permutation from a seed, or from OS entropy when `seed` is `None`.
pub fn shuffled(len: usize, seed: Option<u64>) -> Result<Vec<i32>, DriverError> {
    init_array(len, &mut rng(seed))
}
