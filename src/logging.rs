// Tracing subscriber setup

use eyre::{Result, eyre};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this again
/// after a successful init is a no-op.
pub fn init_logging(default_filter: &str) -> Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| eyre!("Invalid log filter {:?}: {}", default_filter, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("Failed to install tracing subscriber: {}", e))?;

    let _ = INITIALIZED.set(());
    Ok(())
}
