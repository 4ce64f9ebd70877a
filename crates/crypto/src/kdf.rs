//! Key Derivation Function (KDF)
//!
//! scrypt turns a passphrase into the private key scalar. This is the whole
//! barrier between a human-memorable passphrase and the key, so the default
//! cost is the EIP-2335 level: N=262144 (2^18), r=8, p=1, 32-byte output.
//!
//! The salt is stored as a hex string, and the KDF is fed the bytes of that
//! string as written in the keystore rather than the decoded bytes. Keystores
//! written by earlier versions of the tool depend on this.

use std::time::Instant;

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CryptoError, CryptoResult};
use crate::scalar::{PrivateScalar, SCALAR_LENGTH};
use crate::secure::SecretBytes;

/// Standard scrypt parameters
pub const SCRYPT_N: i64 = 262144; // 2^18
pub const SCRYPT_R: i64 = 8; // block size
pub const SCRYPT_P: i64 = 1; // parallelization
pub const SCRYPT_DKLEN: i64 = SCALAR_LENGTH as i64; // derived key length

/// Largest accepted N (2^20)
pub const MAX_SCRYPT_N: i64 = 1 << 20;

/// Upper bound on scrypt working memory (128 * r * N and 128 * r * p), 1 GiB
pub const MAX_SCRYPT_MEMORY: i128 = 1 << 30;

/// Salt length in bytes (before hex encoding)
pub const SALT_LENGTH: usize = 32;

/// scrypt parameters, chosen once at generation and replayed on reveal
///
/// Factors are signed so that a keystore carrying a zero or negative factor
/// still decodes and is then rejected by [`KdfParams::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KdfParams {
    /// Salt as hex string
    pub salt: String,
    /// CPU/memory cost parameter (power of 2)
    pub n: i64,
    /// Block size parameter
    pub r: i64,
    /// Parallelization parameter
    pub p: i64,
    /// Derived key length in bytes
    #[serde(rename = "keyLen")]
    pub key_len: i64,
}

impl KdfParams {
    /// Default parameters with a fresh random salt
    pub fn generate() -> Self {
        Self::with_cost(SCRYPT_N, SCRYPT_R, SCRYPT_P)
    }

    /// Parameters with the given cost factors and a fresh random salt
    pub fn with_cost(n: i64, r: i64, p: i64) -> Self {
        Self {
            salt: hex::encode(generate_salt()),
            n,
            r,
            p,
            key_len: SCRYPT_DKLEN,
        }
    }

    /// Validate the parameters
    pub fn validate(&self) -> CryptoResult<()> {
        // n must be a power of 2 greater than 1
        if self.n <= 1 || (self.n & (self.n - 1)) != 0 {
            return Err(CryptoError::InvalidKdfParams(format!(
                "n must be a power of 2 greater than 1, got {}",
                self.n
            )));
        }
        if self.r <= 0 || self.r > u32::MAX as i64 {
            return Err(CryptoError::InvalidKdfParams(format!(
                "r must be a positive 32-bit integer, got {}",
                self.r
            )));
        }
        if self.p <= 0 || self.p > u32::MAX as i64 {
            return Err(CryptoError::InvalidKdfParams(format!(
                "p must be a positive 32-bit integer, got {}",
                self.p
            )));
        }
        if self.n > MAX_SCRYPT_N {
            return Err(CryptoError::InvalidKdfParams(format!(
                "n must be at most {}, got {}",
                MAX_SCRYPT_N, self.n
            )));
        }
        // scrypt allocates 128 * r * N bytes for V and 128 * r * p for B
        let block = 128 * self.r as i128;
        let memory = block * (self.n as i128).max(self.p as i128);
        if memory > MAX_SCRYPT_MEMORY {
            return Err(CryptoError::InvalidKdfParams(format!(
                "n={}, r={}, p={} need more than {} bytes of memory",
                self.n, self.r, self.p, MAX_SCRYPT_MEMORY
            )));
        }
        if self.key_len <= 0 || self.key_len > SCALAR_LENGTH as i64 {
            return Err(CryptoError::InvalidKdfParams(format!(
                "keyLen must be between 1 and {}, got {}",
                SCALAR_LENGTH, self.key_len
            )));
        }
        Ok(())
    }

    /// log2(n); only meaningful after [`KdfParams::validate`] succeeded
    fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }
}

/// Derive the private key scalar for `passphrase`
///
/// Deterministic: the same passphrase and parameters always give the same
/// scalar. Any passphrase is accepted, including the empty one.
///
/// # Errors
///
/// [`CryptoError::InvalidKdfParams`] if the parameters fail validation,
/// [`CryptoError::KdfError`] if scrypt itself fails.
pub fn derive_scalar(passphrase: &str, params: &KdfParams) -> CryptoResult<PrivateScalar> {
    params.validate()?;

    debug!(
        "Deriving key with scrypt: n={}, r={}, p={}, keyLen={}",
        params.n, params.r, params.p, params.key_len
    );
    let started = Instant::now();

    let derived = scrypt_derive_key(
        passphrase,
        params.salt.as_bytes(),
        params.log_n(),
        params.r as u32,
        params.p as u32,
        params.key_len as usize,
    )?;

    debug!("scrypt finished in {} ms", started.elapsed().as_millis());

    PrivateScalar::from_be_slice(derived.expose_secret())
}

/// Derive a key using scrypt KDF
///
/// # Arguments
///
/// * `passphrase` - User passphrase
/// * `salt` - Salt bytes
/// * `log_n` - log2 of the CPU/memory cost parameter
/// * `r` - Block size parameter
/// * `p` - Parallelization parameter
/// * `dklen` - Desired key length in bytes
pub fn scrypt_derive_key(
    passphrase: &str,
    salt: &[u8],
    log_n: u8,
    r: u32,
    p: u32,
    dklen: usize,
) -> CryptoResult<SecretBytes> {
    let params = scrypt::Params::new(log_n, r, p, dklen)
        .map_err(|e| CryptoError::InvalidKdfParams(e.to_string()))?;

    let mut output = vec![0u8; dklen];
    scrypt::scrypt(passphrase.as_bytes(), salt, &params, &mut output)
        .map_err(|e| CryptoError::KdfError(e.to_string()))?;

    Ok(secrecy::SecretBox::new(Box::new(output)))
}

/// Generate a random salt from the OS CSPRNG
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LENGTH];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
