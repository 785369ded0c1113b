use crate::error::Result;
use crate::key::BloomKey;

pub trait MembershipFilter {
    fn insert<K: BloomKey + ?Sized>(&mut self, item: &K) -> Result<()>;
    fn contains<K: BloomKey + ?Sized>(&self, item: &K) -> Result<bool>;
}

/// Read-only figures used for reporting, not for correctness.
pub trait FilterStats {
    fn expected_items(&self) -> usize;
    fn false_positive_rate(&self) -> f64;
    fn bit_array_size(&self) -> usize;
    fn number_hash_functions(&self) -> usize;
    /// Bytes held by the packed bit storage.
    fn storage_bytes(&self) -> usize;
    fn count_ones(&self) -> usize;

    fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.bit_array_size() as f64
    }

    /// Chance that a never-inserted item is reported present, given the
    /// bits set so far.
    fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.number_hash_functions() as i32)
    }
}
