//! Validated tag keys
//!
//! A `Key` is a 1-255 byte ASCII name restricted to `[A-Za-z0-9_.-]`.
//! Its wire form (length byte followed by the raw ASCII) is computed once
//! at construction and never changes, so schemes can hand the same bytes
//! to every encode call.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{ProtocolError, Result, MAX_KEY_LEN};

/// A validated tag key with its precomputed wire encoding
#[derive(Debug, Clone)]
pub struct Key {
    name: String,
    encoded: Vec<u8>,
}

impl Key {
    /// Create a key, validating length and charset
    ///
    /// # Errors
    ///
    /// Fails with [`ProtocolError::InvalidKey`] if the name is empty,
    /// longer than 255 bytes, or contains a character outside
    /// `[A-Za-z0-9_.-]`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(ProtocolError::invalid_key("key must not be empty"));
        }
        if name.len() > MAX_KEY_LEN {
            return Err(ProtocolError::invalid_key(format!(
                "key length {} exceeds maximum {MAX_KEY_LEN}",
                name.len()
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        {
            return Err(ProtocolError::invalid_key(format!(
                "character {bad:?} not in permitted set [A-Za-z0-9_.-]"
            )));
        }

        let mut encoded = Vec::with_capacity(1 + name.len());
        encoded.push(name.len() as u8);
        encoded.extend_from_slice(name.as_bytes());

        Ok(Self { name, encoded })
    }

    /// Get the key name
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Get the wire encoding: length byte followed by ASCII bytes
    #[inline]
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }
}

// Equality and hashing go through the name only; the encoding is derived.

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
