use crate::error;

use std::fmt;
use std::ops::Deref;

use error::TagError;

/// Number of bytes a `u64` accumulator holds without losing high-order bytes.
pub const DECIMAL_WIDTH: usize = 8;

/// Folds bytes into an unsigned integer, first byte most significant.
///
/// The accumulator is a fixed `u64`: for inputs longer than 8 bytes only the
/// last 8 bytes survive.
///
/// ```
/// # use tag_identifier::identifier::fold_big_endian;
/// assert_eq!(fold_big_endian(&[0x01, 0x00]), 256);
/// ```
pub fn fold_big_endian(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}

/// Same fold as [`fold_big_endian`] applied to the byte-reversed sequence.
pub fn fold_reversed(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}

/// Unique identifier (UID) reported by a tag during anticollision.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIdentifier {
    val: Vec<u8>,
}

impl TagIdentifier {
    pub fn from_raw(raw: Vec<u8>) -> Result<Self, TagError> {
        if raw.is_empty() {
            return Err(TagError::NoIdentifier);
        }

        Ok(Self { val: raw })
    }

    /// Uppercase hex, two digits per byte
    pub fn hex(&self) -> String {
        hex::encode_upper(&self.val)
    }

    pub fn decimal_be(&self) -> u64 {
        fold_big_endian(&self.val)
    }

    pub fn decimal_rev(&self) -> u64 {
        fold_reversed(&self.val)
    }

    /// True when the decimal interpretations dropped high-order bytes.
    pub fn is_decimal_truncated(&self) -> bool {
        self.val.len() > DECIMAL_WIDTH
    }
}

impl Deref for TagIdentifier {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.val
    }
}

impl fmt::Display for TagIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
