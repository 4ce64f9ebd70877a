//! Keystore error types

use thiserror::Error;

use crate::error::CryptoError;

/// Errors that can occur during keystore operations
#[derive(Error, Debug)]
pub enum KeystoreError {
    /// Re-derived address does not match the stored one
    ///
    /// Deliberately carries no detail about which side was wrong.
    #[error("wrong password")]
    PassphraseMismatch,

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The keystore file or its directory could not be written
    #[error("failed to write keystore: {0}")]
    WriteError(std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Malformed parameters or an unusable derived scalar
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl KeystoreError {
    /// Whether the keystore could not be read or decoded
    pub fn is_storage(&self) -> bool {
        matches!(self, KeystoreError::IoError(_) | KeystoreError::JsonError(_))
    }

    /// Whether the keystore could not be written out
    pub fn is_write(&self) -> bool {
        matches!(self, KeystoreError::WriteError(_))
    }

    /// Whether the keystore parameters or the derivation are at fault
    pub fn is_configuration(&self) -> bool {
        matches!(self, KeystoreError::Crypto(e) if e.is_configuration())
    }
}

/// Result type for keystore operations
pub type KeystoreResult<T> = Result<T, KeystoreError>;
