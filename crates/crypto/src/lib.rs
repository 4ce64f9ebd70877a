//! Cryptographic core for splitkey
//!
//! This crate provides:
//! - scrypt key derivation from a passphrase to a secp256k1 scalar
//! - EVM address binding used to check a passphrase against a keystore
//! - The version 1 recovery keystore (KDF parameters + expected address)
//! - Additive two-share splitting of the private key for paper backup

pub mod error;
pub mod kdf;
pub mod keystore;
pub mod scalar;
pub mod secp256k1;
pub mod secure;
pub mod split;

// Error exports
pub use error::{CryptoError, CryptoResult};

// Key derivation exports
pub use kdf::{derive_scalar, generate_salt, scrypt_derive_key, KdfParams};

// Scalar exports
pub use scalar::{PrivateScalar, SCALAR_LENGTH};

// Secp256k1 exports (EVM-compatible)
pub use secp256k1::{bind_address, Secp256k1PublicKey, Secp256k1SecretKey};

// Keystore exports
pub use keystore::{keystore_filename, KeystoreError, KeystoreRecord, KEYSTORE_VERSION};

// Splitting exports
pub use split::{combine, parse_hex, render_hex, split, split_with_rng, AdditiveShares};

// Secure memory exports
pub use secure::{ExposeSecret, SecretArray, SecretString};

/// 256-bit unsigned integer used for scalar arithmetic.
pub use alloy_primitives::U256;
