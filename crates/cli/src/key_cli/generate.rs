//! Keystore generation command implementation
//!
//! Derives a key from a passphrase and writes the keystore that recovers it.

use super::common::{get_passphrase, keystore_output_path};
use anyhow::{Context, Result};
use splitkey_crypto::{ExposeSecret, KdfParams, KeystoreRecord};
use std::path::PathBuf;
use tracing::info;

/// Execute the generate command
pub fn execute(
    name: &str,
    output_dir: Option<PathBuf>,
    (n, r, p): (i64, i64, i64),
    passphrase_file: Option<PathBuf>,
) -> Result<()> {
    // Reject bad cost flags before asking for anything
    let params = KdfParams::with_cost(n, r, p);
    params.validate().context("Invalid scrypt parameters")?;

    let passphrase = get_passphrase(passphrase_file.as_deref())?;

    info!("Deriving key with scrypt (n={}, r={}, p={})...", n, r, p);
    let (record, _scalar) = KeystoreRecord::create(passphrase.expose_secret(), params)
        .context("Key derivation failed")?;

    let path = keystore_output_path(output_dir.as_deref(), name, record.address());
    record
        .save(&path)
        .with_context(|| format!("Failed to write keystore: {}", path.display()))?;

    println!("Your keystore has been generated.");
    println!("File:  {}", path.display());

    Ok(())
}
