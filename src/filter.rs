use crate::config::{BloomConfig, BloomParams};
use crate::error::{BloomError, Result};
use crate::key::BloomKey;
use crate::traits::{FilterStats, MembershipFilter};
use bitvec::{order::Lsb0, vec::BitVec};
use tracing::debug;

/// A fixed-capacity Bloom filter over a bit-packed array.
///
/// The bit array size and probe count are derived once from the expected
/// number of items and the target false positive rate; neither changes
/// afterwards. Bits only ever go from 0 to 1, so anything inserted is
/// always reported as present.
pub struct BloomFilter {
    config: BloomConfig,
    params: BloomParams,
    bits: BitVec<usize, Lsb0>,
}

impl BloomFilter {
    /// Sizes a filter for `expected_items` at `false_positive_rate` using
    /// the default hash function.
    pub fn new(
        expected_items: usize,
        false_positive_rate: f64,
    ) -> Result<Self> {
        Self::from_config(BloomConfig {
            expected_items,
            false_positive_rate,
            ..BloomConfig::default()
        })
    }

    pub fn from_config(config: BloomConfig) -> Result<Self> {
        let params = BloomParams::try_from(&config)?;
        let bits = allocate_bits(params.bit_array_size)?;

        debug!(
            expected_items = config.expected_items,
            false_positive_rate = config.false_positive_rate,
            bit_array_size = params.bit_array_size,
            number_hash_functions = params.number_hash_functions,
            "Created bloom filter"
        );

        Ok(Self {
            config,
            params,
            bits,
        })
    }

    pub fn config(&self) -> &BloomConfig {
        &self.config
    }

    pub fn params(&self) -> &BloomParams {
        &self.params
    }

    /// Bit positions probed for `item`, in probe order.
    pub fn probe_indices<K: BloomKey + ?Sized>(
        &self,
        item: &K,
    ) -> Result<Vec<usize>> {
        let bytes = item.key_bytes()?;
        let indices = (self.config.hash_function)(
            &bytes,
            self.params.number_hash_functions,
            self.params.bit_array_size,
        )?;

        if let Some(&index) =
            indices.iter().find(|&&idx| idx >= self.params.bit_array_size)
        {
            return Err(BloomError::IndexOutOfBounds {
                index,
                capacity: self.params.bit_array_size,
            });
        }
        Ok(indices)
    }

    pub fn insert<K: BloomKey + ?Sized>(&mut self, item: &K) -> Result<()> {
        // Every index is checked before the first bit is set.
        for idx in self.probe_indices(item)? {
            self.bits.set(idx, true);
        }
        Ok(())
    }

    pub fn contains<K: BloomKey + ?Sized>(&self, item: &K) -> Result<bool> {
        for idx in self.probe_indices(item)? {
            if !self.bits[idx] {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Raw words backing the bit array.
    pub fn as_raw_slice(&self) -> &[usize] {
        self.bits.as_raw_slice()
    }
}

/// Zeroed bit array of `len` bits; an allocation failure becomes an error
/// rather than an abort.
fn allocate_bits(len: usize) -> Result<BitVec<usize, Lsb0>> {
    let word_count = len.div_ceil(usize::BITS as usize);
    let mut words: Vec<usize> = Vec::new();
    words.try_reserve_exact(word_count).map_err(|e| {
        BloomError::invalid(
            "expected_items",
            format!("cannot allocate {len} bits: {e}"),
        )
    })?;
    words.resize(word_count, 0);

    let mut bits = BitVec::from_vec(words);
    bits.truncate(len);
    Ok(bits)
}

impl MembershipFilter for BloomFilter {
    fn insert<K: BloomKey + ?Sized>(&mut self, item: &K) -> Result<()> {
        BloomFilter::insert(self, item)
    }

    fn contains<K: BloomKey + ?Sized>(&self, item: &K) -> Result<bool> {
        BloomFilter::contains(self, item)
    }
}

impl FilterStats for BloomFilter {
    fn expected_items(&self) -> usize {
        self.config.expected_items
    }

    fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    fn bit_array_size(&self) -> usize {
        self.params.bit_array_size
    }

    fn number_hash_functions(&self) -> usize {
        self.params.number_hash_functions
    }

    fn storage_bytes(&self) -> usize {
        std::mem::size_of_val(self.bits.as_raw_slice())
    }

    fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ expected_items: {}, false_positive_rate: {}, bit_array_size: {}, number_hash_functions: {} }}",
            self.config.expected_items,
            self.config.false_positive_rate,
            self.params.bit_array_size,
            self.params.number_hash_functions
        )
    }
}
