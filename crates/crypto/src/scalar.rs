//! Private key scalar
//!
//! The KDF output interpreted as a big-endian unsigned integer. The scalar
//! is kept as 32 big-endian bytes in a zeroizing container and converted to
//! a [`U256`] only for the duration of share arithmetic.

use alloy_primitives::U256;

use crate::error::{CryptoError, CryptoResult};
use crate::secure::SecretArray;

/// Width of a secp256k1 scalar in bytes
pub const SCALAR_LENGTH: usize = 32;

/// A private key scalar (32 bytes, big-endian)
pub struct PrivateScalar(SecretArray<SCALAR_LENGTH>);

impl PrivateScalar {
    /// Wrap a 32-byte big-endian scalar
    pub fn from_bytes(bytes: [u8; SCALAR_LENGTH]) -> Self {
        Self(SecretArray::new(bytes))
    }

    /// Interpret up to 32 big-endian bytes as a scalar, left-padding with zeros
    pub fn from_be_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() > SCALAR_LENGTH {
            return Err(CryptoError::InvalidKdfParams(format!(
                "key length {} exceeds scalar width {}",
                bytes.len(),
                SCALAR_LENGTH
            )));
        }
        let mut padded = [0u8; SCALAR_LENGTH];
        padded[SCALAR_LENGTH - bytes.len()..].copy_from_slice(bytes);
        Ok(Self::from_bytes(padded))
    }

    /// Build a scalar from a 256-bit integer
    pub fn from_u256(value: U256) -> Self {
        Self::from_bytes(value.to_be_bytes::<SCALAR_LENGTH>())
    }

    /// Big-endian bytes of the scalar
    pub fn expose_bytes(&self) -> &[u8; SCALAR_LENGTH] {
        self.0.expose_secret()
    }

    /// The scalar as an integer
    pub fn to_u256(&self) -> U256 {
        U256::from_be_bytes(*self.expose_bytes())
    }

    /// Whether the scalar is zero
    pub fn is_zero(&self) -> bool {
        self.expose_bytes().iter().all(|b| *b == 0)
    }
}

impl std::fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateScalar")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for PrivateScalar {
    fn eq(&self, other: &Self) -> bool {
        self.expose_bytes() == other.expose_bytes()
    }
}

impl Eq for PrivateScalar {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_slice_is_left_padded() {
        let scalar = PrivateScalar::from_be_slice(&[0x01, 0x02]).unwrap();
        let mut expected = [0u8; 32];
        expected[30] = 0x01;
        expected[31] = 0x02;
        assert_eq!(scalar.expose_bytes(), &expected);
        assert_eq!(scalar.to_u256(), U256::from(0x0102u64));
    }

    #[test]
    fn test_oversized_slice_rejected() {
        let result = PrivateScalar::from_be_slice(&[0xFF; 33]);
        assert!(matches!(result, Err(CryptoError::InvalidKdfParams(_))));
    }

    #[test]
    fn test_u256_roundtrip() {
        let value = U256::from(0xDEADBEEFu64) << 200;
        let scalar = PrivateScalar::from_u256(value);
        assert_eq!(scalar.to_u256(), value);
        assert_eq!(scalar.expose_bytes()[3], 0xDE);
        assert_eq!(scalar.expose_bytes()[6], 0xEF);
    }

    #[test]
    fn test_is_zero() {
        assert!(PrivateScalar::from_bytes([0u8; 32]).is_zero());
        assert!(!PrivateScalar::from_be_slice(&[1]).unwrap().is_zero());
    }

    #[test]
    fn test_debug_redacted() {
        let scalar = PrivateScalar::from_bytes([0xABu8; 32]);
        let debug = format!("{:?}", scalar);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.to_lowercase().contains("abab"));
    }
}
