//! Common utilities for key CLI commands

use anyhow::{anyhow, Context, Result};
use splitkey_crypto::{keystore_filename, SecretString};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use zeroize::Zeroize;

use crate::config::PASSPHRASE_PROMPT;

/// Read passphrase from file or prompt interactively
pub fn get_passphrase(passphrase_file: Option<&Path>) -> Result<SecretString> {
    if let Some(file) = passphrase_file {
        read_passphrase_from_file(file)
    } else {
        prompt_passphrase()
    }
}

/// Read the first line of a file as the passphrase
///
/// Only the line ending is stripped; an empty passphrase is allowed.
pub fn read_passphrase_from_file(path: &Path) -> Result<SecretString> {
    let mut content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read passphrase file: {}", path.display()))?;

    let mut passphrase = content.lines().next().unwrap_or_default().to_string();
    content.zeroize();
    strip_line_ending(&mut passphrase);

    Ok(passphrase.into())
}

/// Prompt for the passphrase
///
/// On a terminal the input is not echoed. Otherwise one line is read from
/// stdin so the passphrase can be piped in.
pub fn prompt_passphrase() -> Result<SecretString> {
    if io::stdin().is_terminal() {
        let passphrase =
            rpassword::prompt_password(PASSPHRASE_PROMPT).context("Failed to read passphrase")?;
        return Ok(passphrase.into());
    }

    print!("{}", PASSPHRASE_PROMPT);
    io::stdout().flush()?;
    read_passphrase_line(&mut io::stdin().lock())
}

/// Read one passphrase line from `reader`
///
/// A closed input with nothing on it is an error, not an empty passphrase.
pub fn read_passphrase_line<R: BufRead>(reader: &mut R) -> Result<SecretString> {
    let mut passphrase = String::new();
    let read = reader
        .read_line(&mut passphrase)
        .context("Failed to read passphrase")?;
    if read == 0 {
        return Err(anyhow!("No passphrase provided on stdin"));
    }
    strip_line_ending(&mut passphrase);
    Ok(passphrase.into())
}

/// Path a generated keystore is written to
pub fn keystore_output_path(output_dir: Option<&Path>, name: &str, address: &str) -> PathBuf {
    let file_name = keystore_filename(name, address);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn strip_line_ending(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}
