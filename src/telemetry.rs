//! Logging setup shared by the binaries.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a `tracing` subscriber that writes to **stderr**.
///
/// Stdout is reserved for results. Verbosity follows `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}
