use crate::error::{BloomError, Result};
use fnv::FnvHasher;
use murmur3::murmur3_x64_128;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the hash function used in the Bloom filter.
///
/// This function takes the byte representation of an item and computes
/// multiple probe indices for the Bloom filter's bit array.
///
/// **Parameters:**
///
/// - `item: &[u8]`
///   - A byte slice representing the item to be hashed.
/// - `num_hashes: usize`
///   - The number of probe indices to compute for the item.
/// - `bit_array_size: usize`
///   - The size of the Bloom filter's bit array. Every returned index must
///     lie in `[0, bit_array_size)`.
///
/// **Returns:**
///
/// - `Result<Vec<usize>>`
///   - One index per probe, in probe order, or a `HashingError` when the
///     item could not be hashed.
pub type HashFunction = fn(&[u8], usize, usize) -> Result<Vec<usize>>;

/// Low 64 bits of MurmurHash3 x64/128 with seed 0.
pub(crate) fn hash_murmur64(key: &[u8]) -> Result<u64> {
    let mut cursor = Cursor::new(key);
    murmur3_x64_128(&mut cursor, 0)
        .map(|hash| hash as u64)
        .map_err(|e| {
            BloomError::HashingError(format!("Murmur3 hashing failed: {e}"))
        })
}

/// 64-bit FNV-1a.
pub(crate) fn hash_fnv64(key: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(key);
    hasher.finish()
}

/// The two base hashes of an item, from which every probe is derived.
///
/// Probe `i` lands on `(h1 + i * h2) mod m` using wrapping 64-bit
/// arithmetic. Both base hashes are fixed, seedless algorithms, so the
/// probe sequence for a given byte string is the same on every run and
/// every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeHashes {
    pub h1: u64,
    pub h2: u64,
}

impl ProbeHashes {
    pub fn new(item: &[u8]) -> Result<Self> {
        Ok(Self {
            h1: hash_murmur64(item)?,
            h2: hash_fnv64(item),
        })
    }

    /// Index of probe `i` in a bit array of `bit_array_size` bits.
    ///
    /// `bit_array_size` must be non-zero.
    #[inline]
    pub fn index(&self, i: usize, bit_array_size: usize) -> usize {
        let combined = self.h1.wrapping_add((i as u64).wrapping_mul(self.h2));
        (combined % bit_array_size as u64) as usize
    }
}

pub fn default_hash_function(
    item: &[u8],
    num_hashes: usize,
    bit_array_size: usize,
) -> Result<Vec<usize>> {
    if bit_array_size == 0 {
        return Err(BloomError::invalid(
            "bit_array_size",
            "must be greater than 0",
        ));
    }
    let hashes = ProbeHashes::new(item)?;
    Ok((0..num_hashes)
        .map(|i| hashes.index(i, bit_array_size))
        .collect())
}

/// `ceil(-(n * ln p) / ln(2)^2)`, never less than 1.
///
/// Values that do not fit in `usize` saturate at `usize::MAX`.
pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> usize {
    let ln2 = std::f64::consts::LN_2;
    let size = ((-(n as f64) * fpr.ln()) / (ln2 * ln2)).ceil() as usize;
    size.max(1)
}

/// `round((m / n) * ln 2)`, never less than 1.
pub fn optimal_num_hashes(n: usize, m: usize) -> usize {
    let k = ((m as f64 / n as f64) * std::f64::consts::LN_2).round() as usize;
    k.max(1)
}
