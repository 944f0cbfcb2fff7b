//! # Mediabridge Core
//!
//! Shared foundation types for the mediabridge client: the common error type,
//! the playback configuration consumed by profile construction, a wall-clock
//! stopwatch and a scoped-lock helper for serializing method access.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod sync;
pub mod timing;

// Re-export main types
pub use config::PlaybackConfig;
pub use error::MediaBridgeError;
pub use sync::{with_lock, Synchronized};
pub use timing::ElapsedTimer;
