//! Logging initialization built on `tracing`.
//!
//! Verbosity maps to a default `EnvFilter` level which `RUST_LOG` can
//! always override. Output goes to stderr so `--json` payloads on stdout
//! stay machine-readable.

use crate::error::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber for the CLI.
///
/// `-v` enables debug, `-vv` trace; `--quiet` drops everything below error.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("call_center={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set subscriber: {e}"))?;

    Ok(())
}

/// Initialize logging for tests. Safe to call repeatedly; later calls are
/// no-ops once a subscriber is installed.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
