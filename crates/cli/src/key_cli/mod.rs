//! Key commands for splitkey
//!
//! - `generate`: derive a key from a passphrase and write a recovery keystore
//! - `reveal`: re-derive the key from a keystore and print it with two
//!   additive shares for paper backup
//!
//! # Security Features
//!
//! - Passphrases are read from the terminal without echo when one is attached
//! - Keystores hold no secret, only scrypt parameters and the expected address
//! - A wrong passphrase prints no key material

pub mod common;
pub mod generate;
pub mod reveal;

use anyhow::Result;
use clap::Subcommand;
use splitkey_crypto::{CryptoError, KeystoreError};
use std::path::PathBuf;

use crate::config::{EXIT_CANT_CREATE, EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_NO_INPUT};

/// Key subcommands
#[derive(Subcommand)]
pub enum KeyCommand {
    /// Derive a key from a passphrase and write its recovery keystore
    ///
    /// The keystore is written as `<name>-<address>.json`. It stores the
    /// scrypt parameters and the key's address, never the key itself.
    Generate {
        /// Name prefix for the keystore file
        name: String,

        /// Directory to write the keystore into (default: current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// scrypt CPU/memory cost N (power of 2)
        #[arg(long, default_value_t = splitkey_crypto::kdf::SCRYPT_N)]
        kdf_n: i64,

        /// scrypt block size r
        #[arg(long, default_value_t = splitkey_crypto::kdf::SCRYPT_R)]
        kdf_r: i64,

        /// scrypt parallelization p
        #[arg(long, default_value_t = splitkey_crypto::kdf::SCRYPT_P)]
        kdf_p: i64,

        /// Read passphrase from file instead of prompting
        #[arg(long)]
        passphrase_file: Option<PathBuf>,
    },

    /// Re-derive the key from a keystore and print it with two backup shares
    ///
    /// The shares A and B satisfy A + B = private key. Store them apart.
    Reveal {
        /// Keystore file written by `generate`
        filename: PathBuf,

        /// Read passphrase from file instead of prompting
        #[arg(long)]
        passphrase_file: Option<PathBuf>,
    },
}

/// Execute a key command
pub fn execute_key_command(command: KeyCommand) -> Result<()> {
    match command {
        KeyCommand::Generate {
            name,
            output_dir,
            kdf_n,
            kdf_r,
            kdf_p,
            passphrase_file,
        } => generate::execute(
            &name,
            output_dir,
            (kdf_n, kdf_r, kdf_p),
            passphrase_file,
        ),

        KeyCommand::Reveal {
            filename,
            passphrase_file,
        } => reveal::execute(&filename, passphrase_file),
    }
}

/// Map a command failure to the process exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<KeystoreError>() {
        return if e.is_storage() {
            EXIT_NO_INPUT
        } else if e.is_write() {
            EXIT_CANT_CREATE
        } else if e.is_configuration() {
            EXIT_CONFIG_ERROR
        } else {
            EXIT_FAILURE
        };
    }

    match err.downcast_ref::<CryptoError>() {
        Some(e) if e.is_configuration() => EXIT_CONFIG_ERROR,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_mismatch() {
        let err = anyhow::Error::from(KeystoreError::PassphraseMismatch);
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_exit_code_storage_through_context() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Err::<(), _>(KeystoreError::from(io))
            .context("Failed to load keystore")
            .unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_NO_INPUT);
    }

    #[test]
    fn test_exit_code_write_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Err::<(), _>(KeystoreError::WriteError(io))
            .context("Failed to write keystore")
            .unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_CANT_CREATE);
    }

    #[test]
    fn test_exit_code_configuration() {
        let err = anyhow::Error::from(KeystoreError::from(CryptoError::InvalidScalar));
        assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);

        let err = anyhow::Error::from(CryptoError::InvalidKdfParams("r".to_string()));
        assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_exit_code_other() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);
    }
}
