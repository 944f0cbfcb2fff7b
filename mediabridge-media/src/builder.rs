//! Capability-profile construction
//!
//! The builder turns the playback configuration and per-request flags into a
//! [`DeviceProfile`] deterministically, with no I/O. Construction order
//! matters: the server picks the first matching entry in each list, so the
//! more specific fallback paths are inserted at the front.

use mediabridge_core::PlaybackConfig;
use tracing::debug;

use crate::profile::{
    default_subtitle_profiles, CodecProfile, DeviceProfile, DirectPlayProfile, MediaType,
    TranscodeContext, TranscodingProfile, CLIENT_NAME, MUSIC_TRANSCODING_BITRATE,
    TIMELINE_OFFSET_SECONDS,
};

/// Builds the capability profile registered with the remote media server
///
/// # Example
/// ```rust
/// use mediabridge_core::PlaybackConfig;
/// use mediabridge_media::DeviceProfileBuilder;
///
/// let config = PlaybackConfig::default();
/// let profile = DeviceProfileBuilder::new(&config)
///     .remote(true)
///     .tv_device(true)
///     .build();
/// assert!(!profile.transcoding_profiles.is_empty());
/// ```
#[derive(Debug)]
pub struct DeviceProfileBuilder<'a> {
    config: &'a PlaybackConfig,
    name: String,
    remote: bool,
    bitrate_kbps: Option<u32>,
    force_transcode: bool,
    tv_device: bool,
}

impl<'a> DeviceProfileBuilder<'a> {
    /// Start a builder over the given playback configuration
    pub fn new(config: &'a PlaybackConfig) -> Self {
        Self {
            config,
            name: CLIENT_NAME.to_string(),
            remote: false,
            bitrate_kbps: None,
            force_transcode: false,
            tv_device: false,
        }
    }

    /// Override the client application name reported to the server
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the server is reached over the WAN rather than the local network
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    /// Explicit bitrate cap in kbps, overriding the configured limits
    pub fn bitrate_kbps(mut self, kbps: u32) -> Self {
        self.bitrate_kbps = Some(kbps);
        self
    }

    /// Force transcoding for this request regardless of configuration
    pub fn force_transcode(mut self, force: bool) -> Self {
        self.force_transcode = force;
        self
    }

    /// Whether playback targets a TV-class device needing the conservative
    /// streaming fallback
    pub fn tv_device(mut self, tv: bool) -> Self {
        self.tv_device = tv;
        self
    }

    /// Assemble the profile
    pub fn build(self) -> DeviceProfile {
        let bitrate_kbps = self.bitrate_kbps.unwrap_or(if self.remote {
            self.config.remote_kbps
        } else {
            self.config.local_kbps
        });

        // Baseline: one transcode path per media type, direct play for all
        // three, the fixed subtitle table.
        let mut transcoding_profiles = vec![
            TranscodingProfile::audio(),
            TranscodingProfile::hls_video("h264,mpeg4,mpeg2video"),
            TranscodingProfile::photo(),
        ];
        let mut direct_play_profiles = vec![
            DirectPlayProfile::any(MediaType::Video),
            DirectPlayProfile::any(MediaType::Audio),
            DirectPlayProfile::any(MediaType::Photo),
        ];
        let mut codec_profiles = Vec::new();

        if self.config.transcode_h265 {
            // Pin direct play of video to the non-HEVC codecs; HEVC content
            // then falls through to the transcode paths.
            direct_play_profiles[0].video_codec = Some("h264,mpeg4,mpeg2video".to_string());
        } else {
            // HEVC direct streams are acceptable, so offer a transcode path
            // that passes them through. It must outrank the baseline entry.
            transcoding_profiles.insert(
                0,
                TranscodingProfile::hls_video("h264,h265,hevc,mpeg4,mpeg2video"),
            );
        }

        if self.config.transcode_hi10p {
            codec_profiles.push(CodecProfile::h264_max_8bit());
        }

        if self.config.always_transcode || self.force_transcode {
            direct_play_profiles.clear();
        }

        if self.tv_device {
            // Conservative high-compatibility path; must be matched before
            // anything else, so it goes to the front last.
            transcoding_profiles.insert(0, tv_streaming_profile());
        }

        debug!(
            bitrate_kbps,
            transcoding = transcoding_profiles.len(),
            direct_play = direct_play_profiles.len(),
            "assembled device profile"
        );

        DeviceProfile {
            name: self.name,
            max_streaming_bitrate: u64::from(bitrate_kbps) * 1000,
            music_streaming_transcoding_bitrate: MUSIC_TRANSCODING_BITRATE,
            timeline_offset_seconds: TIMELINE_OFFSET_SECONDS,
            transcoding_profiles,
            direct_play_profiles,
            response_profiles: Vec::new(),
            container_profiles: Vec::new(),
            codec_profiles,
            subtitle_profiles: default_subtitle_profiles(),
        }
    }
}

/// Streaming-scoped fallback for TV-class devices: stereo AAC/MP3 with h264
/// only, segment breaks allowed on non-keyframes
fn tv_streaming_profile() -> TranscodingProfile {
    TranscodingProfile {
        container: Some("ts".to_string()),
        media_type: MediaType::Video,
        protocol: Some("hls".to_string()),
        audio_codec: Some("mp3,aac".to_string()),
        video_codec: Some("h264".to_string()),
        max_audio_channels: Some("2".to_string()),
        context: Some(TranscodeContext::Streaming),
        min_segments: Some("1".to_string()),
        break_on_non_key_frames: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_profile_shape() {
        let profile = tv_streaming_profile();
        assert_eq!(profile.context, Some(TranscodeContext::Streaming));
        assert_eq!(profile.audio_codec.as_deref(), Some("mp3,aac"));
        assert_eq!(profile.video_codec.as_deref(), Some("h264"));
        assert_eq!(profile.max_audio_channels.as_deref(), Some("2"));
        assert_eq!(profile.min_segments.as_deref(), Some("1"));
        assert_eq!(profile.break_on_non_key_frames, Some(true));
    }

    #[test]
    fn test_builder_defaults_use_local_bitrate() {
        let config = PlaybackConfig {
            local_kbps: 4000,
            remote_kbps: 2000,
            ..PlaybackConfig::default()
        };
        let profile = DeviceProfileBuilder::new(&config).build();
        assert_eq!(profile.max_streaming_bitrate, 4_000_000);
        assert_eq!(profile.name, CLIENT_NAME);
    }
}
