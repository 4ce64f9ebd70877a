//! Secure memory handling for key material
//!
//! The passphrase and the derived scalar are the only sensitive values this
//! crate holds. Both live in containers that:
//! - zero their memory on drop via `zeroize`
//! - print `[REDACTED]` from `Debug`
//! - do not implement `Clone`
//!
//! # Example
//!
//! ```rust
//! use splitkey_crypto::secure::SecretArray;
//!
//! let scalar = SecretArray::new([0x11u8; 32]);
//! assert_eq!(scalar.expose_secret()[0], 0x11);
//! drop(scalar); // bytes are zeroed here
//! ```

mod secret;

pub use secrecy::ExposeSecret;
pub use secret::{SecretArray, SecretBytes, SecretString};
