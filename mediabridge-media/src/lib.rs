//! # Mediabridge Media
//!
//! Capability-profile construction for the remote media server, together with
//! the subtitle and color helpers that live alongside it. The profile is a
//! declarative document: it tells the server which containers, codecs,
//! subtitle delivery methods and transport protocols this client can consume,
//! and which fallback transcode paths to prefer.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod color;
pub mod profile;
pub mod subtitles;

// Re-export main types
pub use builder::DeviceProfileBuilder;
pub use color::{player_to_style_color, style_to_player_color};
pub use profile::{
    default_subtitle_profiles, CodecProfile, ContainerProfile, DeviceProfile, DirectPlayProfile,
    MediaType, ProfileCondition, ResponseProfile, SubtitleDeliveryMethod, SubtitleProfile,
    TranscodeContext, TranscodingProfile, CLIENT_NAME,
};
pub use subtitles::{display_title, SubtitleStreamInfo};
