//! Zeroizing secret containers
//!
//! Thin layer over `secrecy` for text and a fixed-size array type for
//! scalars.

use secrecy::SecretBox;
use zeroize::Zeroize;

/// A secret byte vector that is zeroized on drop.
///
/// Holds raw KDF output until it is copied into a scalar.
pub type SecretBytes = SecretBox<Vec<u8>>;

/// A secret string that is zeroized on drop.
///
/// Used for passphrases. The inner value can only be read via
/// `expose_secret()`.
///
/// # Example
///
/// ```rust
/// use splitkey_crypto::secure::{ExposeSecret, SecretString};
///
/// let passphrase: SecretString = "correct-horse".to_string().into();
/// assert_eq!(passphrase.expose_secret(), "correct-horse");
/// ```
pub type SecretString = secrecy::SecretString;

/// A fixed-size secret byte array.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecretArray<const N: usize> {
    inner: [u8; N],
}

impl<const N: usize> SecretArray<N> {
    /// Wrap bytes as a secret.
    pub fn new(bytes: [u8; N]) -> Self {
        Self { inner: bytes }
    }

    /// Expose the secret bytes.
    ///
    /// # Security
    ///
    /// The returned reference should not be stored.
    pub fn expose_secret(&self) -> &[u8; N] {
        &self.inner
    }
}

impl<const N: usize> std::fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretArray")
            .field("length", &N)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

// Clone is intentionally not implemented to prevent accidental copies
