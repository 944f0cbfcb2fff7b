//! # Mediabridge Net
//!
//! Network-locality detection for a configured media server endpoint.
//! Distinguishes same-network servers (including hairpin-NAT setups where a
//! public DNS name resolves back to the caller's own router) from genuinely
//! remote ones, so the client can pick the right bitrate limits.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod locality;

// Re-export main types
pub use locality::{
    is_private_address, DnsHostResolver, HostResolver, HttpIpEcho, LocalityProbe, PublicIpSource,
    PUBLIC_IP_ECHO_URL,
};
