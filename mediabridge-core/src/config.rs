//! Playback configuration consumed by profile construction
//!
//! Values are loaded and validated by the application's settings layer; this
//! type is the read-only view the capability-profile builder works from.

use serde::{Deserialize, Serialize};

/// Bitrate limits and transcoding toggles for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Bitrate limit in kbps when the server is on the local network
    pub local_kbps: u32,
    /// Bitrate limit in kbps when the server is reached over the WAN
    pub remote_kbps: u32,
    /// Ask the server to transcode HEVC content instead of direct playing it
    pub transcode_h265: bool,
    /// Ask the server to transcode 10-bit h264 content
    pub transcode_hi10p: bool,
    /// Never direct play; always request a transcode
    pub always_transcode: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            // Effectively uncapped on the local network
            local_kbps: 2_147_483,
            remote_kbps: 10_000,
            transcode_h265: false,
            transcode_hi10p: false,
            always_transcode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = PlaybackConfig::default();
        assert_eq!(config.local_kbps, 2_147_483);
        assert_eq!(config.remote_kbps, 10_000);
        assert!(!config.transcode_h265);
        assert!(!config.transcode_hi10p);
        assert!(!config.always_transcode);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: PlaybackConfig =
            serde_json::from_str(r#"{"remote_kbps": 4000, "transcode_h265": true}"#).unwrap();
        assert_eq!(config.remote_kbps, 4000);
        assert!(config.transcode_h265);
        assert_eq!(config.local_kbps, 2_147_483);
    }
}
