//! Fixed-capacity Bloom filter with explicit sizing and a portable probe
//! scheme.
//!
//! HowTo:
//!    * Sizing: for `n` expected items and target false positive rate `p`
//!      the bit array holds `m = ceil(-n * ln p / ln(2)^2)` bits and every
//!      operation uses `k = round(m / n * ln 2)` probes (both at least 1).
//!    * Probes: the item's bytes are hashed with MurmurHash3 x64/128 (`h1`)
//!      and FNV-1a 64 (`h2`); probe `i` is `(h1 + i * h2) mod m`.
//!    * Storage: one bit per slot, packed into machine words.
//!
//! Insertion:
//!     * Set the bit at every probe index of the item.
//! Query:
//!     * If any probed bit is clear the item was never inserted.
//!     * If all are set the item was probably inserted.
//!
//! Limits:
//!     * No deletion and no resizing: the filter is sized once.
//!     * Inserting far more than `n` items drives the false positive rate
//!       well above `p`.
//!     * Not synchronized; share it behind a lock if needed.

pub mod common;
pub mod config;
mod error;
mod filter;
mod hash;
mod key;
#[cfg(feature = "cli")]
pub mod names;
mod traits;

pub use config::{
    BloomConfig, BloomConfigBuilder, BloomConfigBuilderError, BloomParams,
};
pub use error::{BloomError, Result};
pub use filter::BloomFilter;
pub use hash::{
    HashFunction, ProbeHashes, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
pub use key::BloomKey;
pub use traits::{FilterStats, MembershipFilter};
