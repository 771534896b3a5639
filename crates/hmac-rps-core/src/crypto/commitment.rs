//! HMAC commitment to the computer's move.

use super::{decode_32, hex32, RevealedKey, SecretKey};
use crate::error::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(key: &[u8], move_name: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(move_name.as_bytes());
    mac
}

/// Commitment = HMAC-SHA256(key, move)
///
/// Published before the human picks a move. Without the key the tag says
/// nothing about which move it binds; with the key anyone can recompute it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitmentTag(#[serde(with = "hex32")] [u8; 32]);

impl CommitmentTag {
    /// Commit to a move name under a secret key
    pub fn commit(key: &SecretKey, move_name: &str) -> Self {
        Self(keyed_mac(key.as_bytes(), move_name).finalize().into_bytes().into())
    }

    /// Verify that the disclosed key and move produce this tag.
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &RevealedKey, move_name: &str) -> bool {
        keyed_mac(key.as_bytes(), move_name)
            .verify_slice(&self.0)
            .is_ok()
    }

    /// Parse a tag from its hex form
    pub fn from_hex(s: &str) -> Result<Self, GameError> {
        decode_32("HMAC", s).map(Self)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentTag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
