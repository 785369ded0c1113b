use rand::{Rng, distr::Alphanumeric};
use simple_bloom_rs::BloomFilter;

pub fn create_test_filter(expected_items: usize, fpr: f64) -> BloomFilter {
    BloomFilter::new(expected_items, fpr).expect("Failed to create test filter")
}

// Consistent, distinct keys
pub fn generate_test_items(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("test_item_{:06}", i)).collect()
}

pub fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
