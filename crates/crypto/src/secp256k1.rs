//! Secp256k1 address binding
//!
//! Maps a private key scalar to its EVM address:
//! keccak256(uncompressed_pubkey[1..])[12..], EIP-55 checksummed, `0x` prefixed.
//!
//! The address is only ever used as a check that a passphrase re-derives the
//! key recorded in a keystore. Uses the k256 crate for curve operations.

use alloy_primitives::{keccak256, Address};
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey as K256SecretKey};

use crate::error::{CryptoError, CryptoResult};
use crate::scalar::PrivateScalar;

/// Secp256k1 secret key (32 bytes scalar)
pub struct Secp256k1SecretKey(K256SecretKey);

impl Secp256k1SecretKey {
    /// Load from raw bytes (32 bytes scalar)
    ///
    /// Zero and values at or above the group order are rejected, never
    /// reduced.
    pub fn from_bytes(bytes: &[u8; 32]) -> CryptoResult<Self> {
        K256SecretKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidScalar)
    }

    /// Load from a derived scalar
    pub fn from_scalar(scalar: &PrivateScalar) -> CryptoResult<Self> {
        Self::from_bytes(scalar.expose_bytes())
    }

    /// Get the corresponding public key
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey(self.0.public_key())
    }
}

impl std::fmt::Debug for Secp256k1SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Secp256k1 public key
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1PublicKey(k256::PublicKey);

impl Secp256k1PublicKey {
    /// Serialize to uncompressed bytes (65 bytes, with 0x04 prefix)
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let encoded = self.0.to_encoded_point(false);
        let mut result = [0u8; 65];
        result.copy_from_slice(encoded.as_bytes());
        result
    }

    /// Derive EVM address from this public key
    pub fn evm_address(&self) -> Address {
        let uncompressed = self.to_uncompressed_bytes();
        // Skip the 0x04 prefix byte
        let hash = keccak256(&uncompressed[1..]);
        Address::from_slice(&hash[12..])
    }
}

impl std::fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_uncompressed_bytes();
        write!(f, "Secp256k1PublicKey({})", hex::encode(&bytes[1..9]))
    }
}

/// Compute the checksummed EVM address string for a scalar
///
/// # Errors
///
/// [`CryptoError::InvalidScalar`] if the scalar is zero or not below the
/// curve order.
pub fn bind_address(scalar: &PrivateScalar) -> CryptoResult<String> {
    let secret = Secp256k1SecretKey::from_scalar(scalar)?;
    Ok(secret.public_key().evm_address().to_checksum(None))
}
