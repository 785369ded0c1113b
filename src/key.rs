//! Byte representations of the values a filter can hold.
//!
//! Probe indices are derived from bytes, so every item type must map to a
//! byte string that is identical on every call and on every platform.
//! Types whose native encoding is platform-specific (`OsStr`, `Path`) are
//! only accepted when they are valid UTF-8.

use crate::error::{BloomError, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub trait BloomKey {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>>;
}

impl<T: BloomKey + ?Sized> BloomKey for &T {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        (**self).key_bytes()
    }
}

impl BloomKey for [u8] {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<const N: usize> BloomKey for [u8; N] {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl BloomKey for Vec<u8> {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl BloomKey for str {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl BloomKey for String {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl BloomKey for char {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        let mut buf = [0u8; 4];
        Ok(Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec()))
    }
}

impl BloomKey for bool {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Owned(vec![u8::from(*self)]))
    }
}

impl BloomKey for OsStr {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.to_str().map(|s| Cow::Borrowed(s.as_bytes())).ok_or_else(|| {
            BloomError::HashingError(format!(
                "{self:?} is not valid UTF-8 and has no portable byte form"
            ))
        })
    }
}

impl BloomKey for OsString {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.as_os_str().key_bytes()
    }
}

impl BloomKey for Path {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.as_os_str().key_bytes()
    }
}

impl BloomKey for PathBuf {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.as_os_str().key_bytes()
    }
}

// Integers hash as their little-endian bytes; usize/isize widen to 64 bits
// so 32- and 64-bit targets agree.
macro_rules! impl_bloom_key_for_int {
    ($($t:ty),*) => {
        $(
            impl BloomKey for $t {
                fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
                    Ok(Cow::Owned(self.to_le_bytes().to_vec()))
                }
            }
        )*
    };
}

impl_bloom_key_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl BloomKey for usize {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Owned((*self as u64).to_le_bytes().to_vec()))
    }
}

impl BloomKey for isize {
    fn key_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Owned((*self as i64).to_le_bytes().to_vec()))
    }
}
