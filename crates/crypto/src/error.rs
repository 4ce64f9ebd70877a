//! Cryptographic error types

use thiserror::Error;

/// Errors raised by key derivation, address binding and share handling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// KDF parameters are malformed (non-positive factor, bad key length, bad N)
    #[error("invalid KDF parameters: {0}")]
    InvalidKdfParams(String),

    /// The KDF itself reported a failure
    #[error("key derivation failed: {0}")]
    KdfError(String),

    /// Scalar is zero or not below the secp256k1 group order
    #[error("derived scalar is not a valid secp256k1 secret key")]
    InvalidScalar,

    /// Text could not be parsed as a 256-bit hex integer
    #[error("invalid hex value: {0}")]
    InvalidHex(String),

    /// Two shares sum past 256 bits
    #[error("share sum does not fit in 256 bits")]
    ShareOverflow,
}

impl CryptoError {
    /// Whether this error points at a corrupted keystore or a derivation defect
    /// rather than at operator input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidKdfParams(_) | CryptoError::KdfError(_) | CryptoError::InvalidScalar
        )
    }
}

/// Result type for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;
