//! Recovery keystore
//!
//! A keystore holds no secret. It records the scrypt parameters used to turn
//! a passphrase into the private key, plus the address that key must map to,
//! so the key can be re-derived later and the passphrase checked. The format
//! is flat JSON:
//!
//! ```json
//! {"version":1,"params":{"salt":"<64 hex>","n":262144,"r":8,"p":1,"keyLen":32},"ETHAddress":"0x..."}
//! ```
//!
//! Field names and nesting are fixed for version 1.
//!
//! # Example
//!
//! ```rust,ignore
//! use splitkey_crypto::keystore::KeystoreRecord;
//! use splitkey_crypto::KdfParams;
//!
//! let (record, scalar) = KeystoreRecord::create("passphrase", KdfParams::generate())?;
//! record.save("./alice-0x....json")?;
//!
//! let loaded = KeystoreRecord::load("./alice-0x....json")?;
//! let scalar = loaded.unlock("passphrase")?;
//! ```

mod error;
mod record;

pub use error::{KeystoreError, KeystoreResult};
pub use record::{keystore_filename, KeystoreRecord, KEYSTORE_VERSION};
