//! Random file names for exercising a filter with realistic keys.

use crate::error::{BloomError, Result};
use rand::{Rng, distr::Alphanumeric};
use std::collections::HashSet;
use tracing::debug;

/// Longest file name most filesystems accept.
pub const MAX_NAME_LENGTH: usize = 255;

const ALPHABET_SIZE: u128 = 62;

pub fn random_name<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

// None when the count does not fit in a u128.
fn distinct_names(length: usize) -> Option<u128> {
    u32::try_from(length)
        .ok()
        .and_then(|len| ALPHABET_SIZE.checked_pow(len))
}

/// `count` distinct alphanumeric names of exactly `length` characters, in
/// the order they were drawn.
pub fn generate_file_names<R: Rng + ?Sized>(
    count: usize,
    length: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    if let Some(available) = distinct_names(length) {
        if (count as u128) > available {
            return Err(BloomError::invalid(
                "count",
                format!(
                    "only {available} distinct names of length {length} exist, {count} requested"
                ),
            ));
        }
    }

    let mut seen = HashSet::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let name = random_name(length, rng);
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }

    debug!(count, length, "Generated file names");
    Ok(names)
}

/// `count` distinct names of the form `prefix` + random suffix, none of
/// which is in `known`.
///
/// The suffix fills `length` after the prefix, with at least one character,
/// and grows when that length cannot hold `count` names beside `known`.
pub fn unknown_names<R: Rng + ?Sized>(
    count: usize,
    length: usize,
    prefix: &str,
    known: &HashSet<&str>,
    rng: &mut R,
) -> Vec<String> {
    let needed = (count as u128).saturating_add(known.len() as u128);
    let mut suffix_length = length.saturating_sub(prefix.len()).max(1);
    while distinct_names(suffix_length).is_some_and(|n| n < needed) {
        suffix_length += 1;
    }

    let mut seen = HashSet::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let name = format!("{prefix}{}", random_name(suffix_length, rng));
        if !known.contains(name.as_str()) && seen.insert(name.clone()) {
            names.push(name);
        }
    }

    debug!(count, suffix_length, "Generated unknown names");
    names
}
