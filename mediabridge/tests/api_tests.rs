//! End-to-end tests through the facade crate's public API

use mediabridge::{
    display_title, player_to_style_color, style_to_player_color, DeviceProfileBuilder,
    ElapsedTimer, MediaType, PlaybackConfig, SubtitleStreamInfo, Synchronized, TranscodeContext,
};

#[test]
fn test_worked_example_baseline() {
    // local 4000 kbps, h265 transcode on, hi10p off, nothing forced
    let config = PlaybackConfig {
        local_kbps: 4000,
        remote_kbps: 10_000,
        transcode_h265: true,
        transcode_hi10p: false,
        always_transcode: false,
    };
    let profile = DeviceProfileBuilder::new(&config).build();

    assert_eq!(profile.max_streaming_bitrate, 4_000_000);
    assert_eq!(profile.direct_play_profiles.len(), 3);
    assert_eq!(profile.transcoding_profiles.len(), 3);
    assert!(profile.codec_profiles.is_empty());
}

#[test]
fn test_worked_example_hevc_passthrough() {
    let config = PlaybackConfig {
        local_kbps: 4000,
        transcode_h265: false,
        ..PlaybackConfig::default()
    };
    let profile = DeviceProfileBuilder::new(&config).build();

    assert_eq!(profile.transcoding_profiles.len(), 4);
    let first = &profile.transcoding_profiles[0];
    assert_eq!(first.media_type, MediaType::Video);
    assert!(first
        .video_codec
        .as_deref()
        .unwrap()
        .contains("hevc"));
}

#[test]
fn test_tv_fallback_ordering_through_facade() {
    let config = PlaybackConfig::default();
    let profile = DeviceProfileBuilder::new(&config)
        .remote(true)
        .tv_device(true)
        .build();

    assert_eq!(
        profile.transcoding_profiles[0].context,
        Some(TranscodeContext::Streaming)
    );
    assert_eq!(profile.max_streaming_bitrate, 10_000_000);
}

#[test]
fn test_subtitle_styling_helpers() {
    let style = player_to_style_color("#C0FFEE00").unwrap();
    assert_eq!(style, "#ffee00");
    assert_eq!(style_to_player_color(&style).unwrap(), "#FFFFEE00");

    let stream = SubtitleStreamInfo {
        language: Some("french".to_string()),
        is_forced: true,
        codec: Some("subrip".to_string()),
    };
    assert_eq!(display_title(&stream).unwrap(), "French Forced (subrip)");
}

#[test]
fn test_timer_and_synchronized_reexports() {
    let timer = ElapsedTimer::new();
    let shared = Synchronized::new(Vec::new());
    shared.with(|items| items.push(timer.elapsed_ms()));
    assert_eq!(shared.with(|items| items.len()), 1);
}
