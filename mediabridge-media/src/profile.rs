//! Capability-profile wire types
//!
//! Field names and nesting follow the remote server's device-profile
//! registration endpoint exactly, so every struct here serializes with the
//! server's PascalCase convention and omits fields the server treats as
//! optional. Ordering inside the profile lists is significant: the server
//! walks them front to back and uses the first match, so position encodes
//! priority.

use mediabridge_core::MediaBridgeError;
use serde::{Deserialize, Serialize};

/// Client application name reported in the profile
pub const CLIENT_NAME: &str = "Mediabridge";

/// Fixed bitrate cap for server-side music transcodes, in bits per second
pub const MUSIC_TRANSCODING_BITRATE: u64 = 1_280_000;

/// Fixed timeline offset reported to the server, in seconds
pub const TIMELINE_OFFSET_SECONDS: u32 = 5;

/// Media type a profile entry applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    /// Video streams
    Video,
    /// Audio streams
    Audio,
    /// Still images
    Photo,
}

/// How the server should deliver a subtitle format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubtitleDeliveryMethod {
    /// Muxed into the media stream
    Embed,
    /// Served as a separate sidecar download
    External,
}

/// Context a transcoding profile is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscodeContext {
    /// Live streaming playback
    Streaming,
    /// Offline conversion
    Static,
}

/// One server-side conversion path the client can consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscodingProfile {
    /// Target container, e.g. "ts" or "jpeg"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// Media type this path applies to
    #[serde(rename = "Type")]
    pub media_type: MediaType,
    /// Transport protocol, e.g. "hls"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Comma-separated audio codecs the client accepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    /// Comma-separated video codecs the client accepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    /// Channel cap, transmitted as a string per the server's schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_audio_channels: Option<String>,
    /// Playback context this path is restricted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<TranscodeContext>,
    /// Minimum number of segments before playback starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_segments: Option<String>,
    /// Whether the server may cut segments on non-keyframes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_on_non_key_frames: Option<bool>,
}

impl TranscodingProfile {
    /// Codec-agnostic audio path
    pub fn audio() -> Self {
        Self {
            container: None,
            media_type: MediaType::Audio,
            protocol: None,
            audio_codec: None,
            video_codec: None,
            max_audio_channels: None,
            context: None,
            min_segments: None,
            break_on_non_key_frames: None,
        }
    }

    /// General-purpose HLS video path with the given video codec list
    pub fn hls_video(video_codecs: &str) -> Self {
        Self {
            container: Some("ts".to_string()),
            media_type: MediaType::Video,
            protocol: Some("hls".to_string()),
            audio_codec: Some("aac,mp3,ac3,opus,flac,vorbis".to_string()),
            video_codec: Some(video_codecs.to_string()),
            max_audio_channels: Some("6".to_string()),
            context: None,
            min_segments: None,
            break_on_non_key_frames: None,
        }
    }

    /// JPEG conversion path for stills
    pub fn photo() -> Self {
        Self {
            container: Some("jpeg".to_string()),
            media_type: MediaType::Photo,
            protocol: None,
            audio_codec: None,
            video_codec: None,
            max_audio_channels: None,
            context: None,
            min_segments: None,
            break_on_non_key_frames: None,
        }
    }
}

/// One media type the server may send unmodified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectPlayProfile {
    /// Media type this entry applies to
    #[serde(rename = "Type")]
    pub media_type: MediaType,
    /// Comma-separated video codecs eligible for direct play; absent means any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
}

impl DirectPlayProfile {
    /// Direct play of any content of the given media type
    pub fn any(media_type: MediaType) -> Self {
        Self {
            media_type,
            video_codec: None,
        }
    }
}

/// One predicate inside a codec restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileCondition {
    /// Comparison operator, e.g. "LessThanEqual"
    pub condition: String,
    /// Stream property the condition reads, e.g. "VideoBitDepth"
    pub property: String,
    /// Comparison operand, transmitted as a string
    pub value: String,
}

/// Restriction narrowing when a codec is eligible for direct play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodecProfile {
    /// Media type the restriction applies to
    #[serde(rename = "Type")]
    pub media_type: MediaType,
    // Lowercase key is a quirk of the server's schema
    /// Codec being restricted
    #[serde(rename = "codec")]
    pub codec: String,
    /// Conditions that must all hold for direct play of this codec
    pub conditions: Vec<ProfileCondition>,
}

impl CodecProfile {
    /// Restrict h264 direct play to bit depths of at most 8
    pub fn h264_max_8bit() -> Self {
        Self {
            media_type: MediaType::Video,
            codec: "h264".to_string(),
            conditions: vec![ProfileCondition {
                condition: "LessThanEqual".to_string(),
                property: "VideoBitDepth".to_string(),
                value: "8".to_string(),
            }],
        }
    }
}

/// One subtitle format / delivery method pairing the client supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubtitleProfile {
    /// Subtitle format, e.g. "srt"
    pub format: String,
    /// Delivery method the client accepts for this format
    pub method: SubtitleDeliveryMethod,
}

impl SubtitleProfile {
    fn new(format: &str, method: SubtitleDeliveryMethod) -> Self {
        Self {
            format: format.to_string(),
            method,
        }
    }
}

/// Reserved server-side extension slot; never populated by this client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseProfile {}

/// Reserved server-side extension slot; never populated by this client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerProfile {}

/// The capability profile registered with the remote media server
///
/// Built fresh per request by [`crate::builder::DeviceProfileBuilder`] and
/// immutable afterwards; the only consumer is the HTTP client that posts it
/// to the server's device-profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceProfile {
    /// Client application name
    pub name: String,
    /// Overall streaming bitrate cap in bits per second
    pub max_streaming_bitrate: u64,
    /// Bitrate cap for music transcodes in bits per second
    pub music_streaming_transcoding_bitrate: u64,
    /// Timeline offset reported to the server, in seconds
    pub timeline_offset_seconds: u32,
    /// Conversion paths in priority order, most preferred first
    pub transcoding_profiles: Vec<TranscodingProfile>,
    /// Media types eligible for unmodified delivery; empty forces transcoding
    pub direct_play_profiles: Vec<DirectPlayProfile>,
    /// Reserved; always empty
    pub response_profiles: Vec<ResponseProfile>,
    /// Reserved; always empty
    pub container_profiles: Vec<ContainerProfile>,
    /// Codec restrictions narrowing direct-play eligibility
    pub codec_profiles: Vec<CodecProfile>,
    /// Supported subtitle formats and delivery methods
    pub subtitle_profiles: Vec<SubtitleProfile>,
}

impl DeviceProfile {
    /// Serialize the profile for transmission to the server
    pub fn to_json(&self) -> Result<String, MediaBridgeError> {
        serde_json::to_string(self).map_err(|e| MediaBridgeError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// The fixed subtitle capability table
///
/// Text formats are offered both embedded and as external sidecars. The
/// image-based formats (pgssub, dvdsub, pgs) are embed-only: the server
/// refuses to serve them as external files.
pub fn default_subtitle_profiles() -> Vec<SubtitleProfile> {
    use SubtitleDeliveryMethod::{Embed, External};

    vec![
        SubtitleProfile::new("srt", External),
        SubtitleProfile::new("srt", Embed),
        SubtitleProfile::new("ass", External),
        SubtitleProfile::new("ass", Embed),
        SubtitleProfile::new("sub", Embed),
        SubtitleProfile::new("sub", External),
        SubtitleProfile::new("ssa", Embed),
        SubtitleProfile::new("ssa", External),
        SubtitleProfile::new("smi", Embed),
        SubtitleProfile::new("smi", External),
        SubtitleProfile::new("pgssub", Embed),
        SubtitleProfile::new("dvdsub", Embed),
        SubtitleProfile::new("pgs", Embed),
    ]
}
