//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - SecretKey and RevealedKey for the per-round HMAC key
//! - CommitmentTag, the HMAC-SHA256 of the computer's move under that key

mod commitment;
mod key;

pub use commitment::CommitmentTag;
pub use key::{RevealedKey, SecretKey, KEY_LEN};

use crate::error::GameError;

/// Decode a hex string that must hold exactly 32 bytes
fn decode_32(what: &'static str, s: &str) -> Result<[u8; 32], GameError> {
    let bytes = hex::decode(s.trim())?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| GameError::InvalidLength {
        what,
        expected: 32,
        actual,
    })
}

mod hex32 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 32 bytes"))
    }
}
