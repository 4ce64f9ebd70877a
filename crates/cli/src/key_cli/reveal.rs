//! Key reveal command implementation
//!
//! Re-derives the key recorded in a keystore, checks the passphrase through
//! the stored address, and prints the key with two additive backup shares.

use super::common::get_passphrase;
use anyhow::{Context, Result};
use splitkey_crypto::{
    render_hex, split, AdditiveShares, ExposeSecret, KeystoreError, KeystoreRecord,
    PrivateScalar,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Execute the reveal command
pub fn execute(filename: &Path, passphrase_file: Option<PathBuf>) -> Result<()> {
    let record = match KeystoreRecord::load(filename) {
        Ok(record) => record,
        Err(e) => {
            println!("File load failed.");
            return Err(e)
                .with_context(|| format!("Failed to load keystore: {}", filename.display()));
        }
    };

    let passphrase = get_passphrase(passphrase_file.as_deref())?;

    info!("Re-deriving key for {}...", record.address());
    let scalar = match record.unlock(passphrase.expose_secret()) {
        Ok(scalar) => scalar,
        Err(KeystoreError::PassphraseMismatch) => {
            warn!("Passphrase did not reproduce the keystore address");
            println!("Wrong password.");
            return Err(KeystoreError::PassphraseMismatch.into());
        }
        Err(e) => return Err(e).context("Key derivation failed"),
    };

    let shares = split(&scalar);
    print!("{}", format_reveal_report(record.address(), &scalar, &shares));

    Ok(())
}

/// Operator-facing report: address, full key, and the two shares
pub fn format_reveal_report(
    address: &str,
    scalar: &PrivateScalar,
    shares: &AdditiveShares,
) -> String {
    format!(
        "Success\n\
         ETH address : {address}\n\
         ------------\n\
         Private key = {key}\n\
         \n\
         A           = {a}\n\
         B           = {b}\n\
         \n\
         Private key = A + B\n",
        key = render_hex(&scalar.to_u256(), false),
        a = render_hex(&shares.a().to_u256(), true),
        b = render_hex(&shares.b().to_u256(), true),
    )
}
