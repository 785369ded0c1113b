use crate::error::{BloomError, Result};
use crate::hash::{
    HashFunction, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
use bitvec::{order::Lsb0, slice::BitSlice};
use derive_builder::Builder;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_EXPECTED_ITEMS: usize = 100_000;
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

pub const ENV_EXPECTED_ITEMS: &str = "BLOOM_EXPECTED_ITEMS";
pub const ENV_FALSE_POSITIVE_RATE: &str = "BLOOM_FALSE_POSITIVE_RATE";

#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct BloomConfig {
    /// Number of items the filter is sized for
    #[builder(default = "DEFAULT_EXPECTED_ITEMS")]
    pub expected_items: usize,

    /// Target false positive rate, exclusive range (0.0, 1.0)
    #[builder(default = "DEFAULT_FALSE_POSITIVE_RATE")]
    pub false_positive_rate: f64,

    /// Probe derivation used by insert and contains
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            expected_items: DEFAULT_EXPECTED_ITEMS,
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
            hash_function: default_hash_function,
        }
    }
}

impl BloomConfig {
    pub fn validate(&self) -> Result<()> {
        if self.expected_items == 0 {
            return Err(BloomError::invalid(
                "expected_items",
                "must be greater than 0",
            ));
        }
        // Written so that NaN also fails.
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(BloomError::invalid(
                "false_positive_rate",
                format!(
                    "must be between 0 and 1 (exclusive), got {}",
                    self.false_positive_rate
                ),
            ));
        }
        Ok(())
    }

    /// Loads `.env` (if any) and reads the filter parameters from the
    /// process environment, falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`BloomConfig::from_env`], reading variables through
    /// `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expected_items =
            parse_var(&lookup, ENV_EXPECTED_ITEMS, DEFAULT_EXPECTED_ITEMS)?;
        let false_positive_rate = parse_var(
            &lookup,
            ENV_FALSE_POSITIVE_RATE,
            DEFAULT_FALSE_POSITIVE_RATE,
        )?;

        debug!(
            expected_items,
            false_positive_rate, "Loaded bloom filter configuration"
        );

        Ok(Self {
            expected_items,
            false_positive_rate,
            hash_function: default_hash_function,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var_name) {
        None => Ok(default),
        Some(value) => {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| BloomError::EnvParseError {
                    var_name: var_name.to_string(),
                    value: value.clone(),
                    error: e.to_string(),
                })
        }
    }
}

/// Derived parameters calculated from BloomConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomParams {
    pub bit_array_size: usize,
    pub number_hash_functions: usize,
}

impl TryFrom<&BloomConfig> for BloomParams {
    type Error = BloomError;

    fn try_from(config: &BloomConfig) -> Result<Self> {
        config.validate()?;

        let bit_array_size = optimal_bit_vector_size(
            config.expected_items,
            config.false_positive_rate,
        );
        if bit_array_size > BitSlice::<usize, Lsb0>::MAX_BITS {
            return Err(BloomError::invalid(
                "expected_items",
                format!(
                    "{} items at rate {} need more bits than can be addressed",
                    config.expected_items, config.false_positive_rate
                ),
            ));
        }
        let number_hash_functions =
            optimal_num_hashes(config.expected_items, bit_array_size);

        Ok(Self {
            bit_array_size,
            number_hash_functions,
        })
    }
}
