//! 256-bit hash values and deterministic index derivation
//!
//! `Hash256` is the universal 256-bit identifier: amendment identifiers and
//! ledger entry indexes are both values of this type. Singleton entry indexes
//! are derived from fixed domain-tag labels so that every process computes
//! the same index without coordination.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A 256-bit value, displayed and parsed as lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// The all-zero value.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive a value from a domain-tag label.
    ///
    /// The derivation is SHA-256 over the label bytes, so the result is a
    /// pure function of the label. Singleton ledger entry indexes are
    /// produced this way.
    pub fn derive(label: &[u8]) -> Self {
        let digest = Sha256::digest(label);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Errors produced when parsing fixed-width hex identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was not valid hex
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Input decoded to the wrong number of bytes
    #[error("expected {expected} bytes, got {actual}")]
    BadLength {
        /// Required byte width
        expected: usize,
        /// Width actually decoded
        actual: usize,
    },
}

impl FromStr for Hash256 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = hex::decode(s).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
        let bytes: [u8; 32] = raw.as_slice().try_into().map_err(|_| ParseError::BadLength {
            expected: 32,
            actual: raw.len(),
        })?;
        Ok(Self(bytes))
    }
}

// Hex strings in serialized form keep config files and diagnostics readable;
// byte-level persistence is a collaborator concern.
impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_stable_per_label() {
        let a = Hash256::derive(b"strata/entry/amendments");
        let b = Hash256::derive(b"strata/entry/amendments");
        let c = Hash256::derive(b"strata/entry/fee-settings");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hex_round_trip() {
        let id = Hash256::new([0xAA; 32]);
        let text = id.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<Hash256>(), Ok(id));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "zz".parse::<Hash256>(),
            Err(ParseError::InvalidHex(_))
        ));
        assert_eq!(
            "aabb".parse::<Hash256>(),
            Err(ParseError::BadLength {
                expected: 32,
                actual: 2
            })
        );
    }

    #[test]
    fn serde_uses_hex_strings() {
        let id = Hash256::new([0x11; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn zero_detection() {
        assert!(Hash256::ZERO.is_zero());
        assert!(!Hash256::new([1; 32]).is_zero());
    }
}
