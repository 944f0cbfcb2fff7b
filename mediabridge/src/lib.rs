//! # Mediabridge
//!
//! Playback-capability negotiation between a local media-playback client and
//! a remote media server. The central piece is the capability profile: a
//! declarative document describing the containers, codecs, subtitle delivery
//! methods and transcode fallbacks this client supports, which the server
//! consults when deciding whether to direct play or transcode.
//!
//! Alongside the profile builder live the small utilities a playback client
//! needs around it: an elapsed timer, a scoped-lock helper, server locality
//! detection and subtitle color/title helpers.
//!
//! ## Quick Start
//!
//! ```rust
//! use mediabridge::{DeviceProfileBuilder, PlaybackConfig};
//!
//! let config = PlaybackConfig::default();
//! let profile = DeviceProfileBuilder::new(&config)
//!     .remote(false)
//!     .tv_device(false)
//!     .build();
//!
//! // The JSON document is handed to the HTTP client that registers the
//! // device profile with the server.
//! let body = profile.to_json()?;
//! assert!(body.contains("MaxStreamingBitrate"));
//! # Ok::<(), mediabridge::MediaBridgeError>(())
//! ```
//!
//! Picking the right bitrate limit first requires knowing whether the server
//! is on the local network:
//!
//! ```rust,no_run
//! use mediabridge::{DeviceProfileBuilder, LocalityProbe, PlaybackConfig};
//!
//! # async fn example() -> Result<(), mediabridge::MediaBridgeError> {
//! let config = PlaybackConfig::default();
//! let probe = LocalityProbe::new();
//! let local = probe.is_local("https://media.example.com:8096/").await?;
//!
//! let profile = DeviceProfileBuilder::new(&config).remote(!local).build();
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core types for easy access
pub use mediabridge_core::{
    with_lock, ElapsedTimer, MediaBridgeError, PlaybackConfig, Synchronized,
};

pub use mediabridge_media::{
    default_subtitle_profiles, display_title, player_to_style_color, style_to_player_color,
    CodecProfile, ContainerProfile, DeviceProfile, DeviceProfileBuilder, DirectPlayProfile,
    MediaType, ProfileCondition, ResponseProfile, SubtitleDeliveryMethod, SubtitleProfile,
    SubtitleStreamInfo, TranscodeContext, TranscodingProfile, CLIENT_NAME,
};

pub use mediabridge_net::{
    is_private_address, DnsHostResolver, HostResolver, HttpIpEcho, LocalityProbe, PublicIpSource,
    PUBLIC_IP_ECHO_URL,
};

pub mod logging;
