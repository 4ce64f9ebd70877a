//! splitkey CLI
//!
//! Derive an Ethereum key from a passphrase, keep a recovery keystore for it,
//! and print the key as two additive shares for paper backup.

use clap::Parser;
use splitkey::{execute_key_command, exit_code_for, KeyCommand, DEFAULT_LOG_LEVEL};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// splitkey
#[derive(Parser)]
#[command(name = "splitkey")]
#[command(author = "splitkey Contributors")]
#[command(version)]
#[command(about = "Passphrase-derived Ethereum keys with split paper backup", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// The logging level (trace|debug|info|warn|error)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// The logging format (json|plain)
    #[arg(long, global = true, default_value = "plain")]
    log_format: String,

    /// Disable colored logs
    #[arg(long, global = true, default_value = "false")]
    log_no_color: bool,

    /// Print out full error chain on failure
    #[arg(long, global = true, default_value = "false")]
    trace: bool,

    #[command(subcommand)]
    command: KeyCommand,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, &cli.log_format, cli.log_no_color);

    let result = execute_key_command(cli.command);

    if let Err(e) = &result {
        if cli.trace {
            eprintln!("Error: {:?}", e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        let code = exit_code_for(e);
        debug!("Exiting with code {}", code);
        std::process::exit(code);
    }
}

fn init_tracing(log_level: &str, log_format: &str, no_color: bool) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // stdout carries operator output only
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr);

    match log_format {
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}
