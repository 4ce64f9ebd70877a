//! CLI configuration constants
//!
//! splitkey keeps no state between runs, so configuration is limited to
//! command-line flags and the `RUST_LOG` environment variable.

/// Default logging level when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prompt shown before reading the passphrase.
pub const PASSPHRASE_PROMPT: &str = "Input a passphrase: ";

/// Exit code for a wrong passphrase and other failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the keystore cannot be read or decoded.
///
/// This follows the sysexits.h convention where 66 = EX_NOINPUT.
pub const EXIT_NO_INPUT: i32 = 66;

/// Exit code when the keystore file cannot be written.
///
/// This follows the sysexits.h convention where 73 = EX_CANTCREAT.
pub const EXIT_CANT_CREATE: i32 = 73;

/// Exit code for malformed KDF parameters or an unusable derived key.
///
/// This follows the sysexits.h convention where 78 = EX_CONFIG.
pub const EXIT_CONFIG_ERROR: i32 = 78;
