//! splitkey CLI
//!
//! Two commands around the `splitkey-crypto` core:
//! - `generate <name>`: derive a key from a passphrase and write its keystore
//! - `reveal <filename>`: re-derive the key, check it, print it with two
//!   additive backup shares

pub mod config;
pub mod key_cli;

pub use config::{
    DEFAULT_LOG_LEVEL, EXIT_CANT_CREATE, EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_NO_INPUT,
    PASSPHRASE_PROMPT,
};
pub use key_cli::{execute_key_command, exit_code_for, KeyCommand};
