//! Version 1 keystore record

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{KeystoreError, KeystoreResult};
use crate::kdf::{derive_scalar, KdfParams};
use crate::scalar::PrivateScalar;
use crate::secp256k1::bind_address;

/// Current keystore schema version
pub const KEYSTORE_VERSION: u32 = 1;

/// Persisted recovery record
///
/// Created once by [`KeystoreRecord::create`] and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeystoreRecord {
    /// Schema version
    pub version: u32,
    /// scrypt parameters and salt
    pub params: KdfParams,
    /// Checksummed address the derived key must map to
    #[serde(rename = "ETHAddress")]
    pub eth_address: String,
}

impl KeystoreRecord {
    /// Derive a key from `passphrase` and build the record that recovers it
    ///
    /// Returns the record together with the derived scalar.
    pub fn create(passphrase: &str, params: KdfParams) -> KeystoreResult<(Self, PrivateScalar)> {
        let scalar = derive_scalar(passphrase, &params)?;
        let eth_address = bind_address(&scalar)?;
        debug!("Derived keystore address {}", eth_address);

        let record = Self {
            version: KEYSTORE_VERSION,
            params,
            eth_address,
        };
        Ok((record, scalar))
    }

    /// Re-derive the key from `passphrase` and check it against this record
    ///
    /// # Errors
    ///
    /// [`KeystoreError::PassphraseMismatch`] when the re-derived address differs
    /// from the stored one. Malformed parameters surface as
    /// [`KeystoreError::Crypto`].
    pub fn unlock(&self, passphrase: &str) -> KeystoreResult<PrivateScalar> {
        let scalar = derive_scalar(passphrase, &self.params)?;
        let address = bind_address(&scalar)?;

        if address != self.eth_address {
            debug!("Re-derived address does not match keystore");
            return Err(KeystoreError::PassphraseMismatch);
        }
        Ok(scalar)
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> KeystoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as compact JSON bytes
    pub fn to_bytes(&self) -> KeystoreResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from JSON bytes
    ///
    /// Only structure is checked. Parameter validity and the address are
    /// checked later by [`KeystoreRecord::unlock`].
    pub fn from_slice(bytes: &[u8]) -> KeystoreResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Write the keystore to `path`, replacing any existing file
    ///
    /// Creates the file with restricted permissions (0600) on Unix.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> KeystoreResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(KeystoreError::WriteError)?;
            }
        }

        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(KeystoreError::WriteError)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions).map_err(KeystoreError::WriteError)?;
        }

        info!("Keystore written to {}", path.display());
        Ok(())
    }

    /// Load a keystore from `path`
    pub fn load<P: AsRef<Path>>(path: P) -> KeystoreResult<Self> {
        let path = path.as_ref();
        debug!("Loading keystore from {}", path.display());
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// The address recorded for this keystore
    pub fn address(&self) -> &str {
        &self.eth_address
    }
}

/// File name for a generated keystore: `<name>-<address>.json`
pub fn keystore_filename(name: &str, address: &str) -> String {
    format!("{}-{}.json", name, address)
}
