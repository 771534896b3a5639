//! Per-round HMAC key and its disclosed form.

use super::{decode_32, hex32};
use crate::error::GameError;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret HMAC key held by the computer for a single round.
///
/// The key has no `Clone`, `Display` or serde impls: the only way to get at
/// its bytes from outside the crate is [`SecretKey::reveal`], which consumes it.
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from a cryptographically secure source.
    ///
    /// Fails with [`GameError::EntropyUnavailable`] when the source cannot
    /// supply the bytes; no partial key is ever returned.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, GameError> {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Disclose the key so the opponent can check the commitment
    pub fn reveal(self) -> RevealedKey {
        RevealedKey(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<redacted>)")
    }
}

/// A key after disclosure, printable as lowercase hex
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedKey(#[serde(with = "hex32")] [u8; KEY_LEN]);

impl RevealedKey {
    /// Parse a key from its hex form
    pub fn from_hex(s: &str) -> Result<Self, GameError> {
        decode_32("HMAC key", s).map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for RevealedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevealedKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for RevealedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("key generation must use try_fill_bytes")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("key generation must use try_fill_bytes")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("key generation must use try_fill_bytes")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("device gone"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_generated_keys_differ() {
        let key1 = SecretKey::generate(&mut OsRng).unwrap().reveal();
        let key2 = SecretKey::generate(&mut OsRng).unwrap().reveal();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let key1 = SecretKey::generate(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();
        let key2 = SecretKey::generate(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();

        assert_eq!(key1.reveal(), key2.reveal());
    }

    #[test]
    fn test_entropy_failure_is_reported() {
        let err = SecretKey::generate(&mut BrokenRng).unwrap_err();

        assert!(matches!(err, GameError::EntropyUnavailable(ref msg) if msg.contains("device gone")));
    }

    #[test]
    fn test_secret_key_debug_is_redacted() {
        let key = SecretKey::from_bytes([0x42; KEY_LEN]);

        assert_eq!(format!("{:?}", key), "SecretKey(<redacted>)");
    }

    #[test]
    fn test_revealed_key_hex() {
        let key = SecretKey::from_bytes(std::array::from_fn(|i| i as u8)).reveal();
        let hex_str = key.to_hex();

        assert_eq!(
            hex_str,
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
        );
        assert_eq!(key.to_string(), hex_str);
        assert_eq!(RevealedKey::from_hex(&hex_str).unwrap(), key);
    }

    #[test]
    fn test_revealed_key_json_is_hex_string() {
        let key = SecretKey::from_bytes([0xff; KEY_LEN]).reveal();
        let json = serde_json::to_string(&key).unwrap();

        assert_eq!(json, format!("\"{}\"", "ff".repeat(KEY_LEN)));
    }
}
