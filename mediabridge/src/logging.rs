//! Logging bootstrap

use mediabridge_core::MediaBridgeError;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Filter directives come from `RUST_LOG`, defaulting to `info`. Fails if a
/// subscriber is already installed.
pub fn init() -> Result<(), MediaBridgeError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| MediaBridgeError::Initialization {
            reason: format!("Failed to install tracing subscriber: {}", e),
        })
}
