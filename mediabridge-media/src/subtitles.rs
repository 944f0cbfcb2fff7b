//! Display titles for subtitle streams

use mediabridge_core::MediaBridgeError;
use serde::{Deserialize, Serialize};

/// Subtitle stream metadata as reported by the server
///
/// Only the fields the display title needs; the server's stream object
/// carries many more.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SubtitleStreamInfo {
    /// Stream language name, e.g. "english"
    pub language: Option<String>,
    /// Whether the stream is a forced track
    pub is_forced: bool,
    /// Subtitle codec, e.g. "subrip"
    pub codec: Option<String>,
}

/// Human-readable label for a subtitle stream
///
/// Produces `"<Language> Forced (<codec>)"`, with the language capitalized
/// and the `Forced` marker only on forced tracks. Streams missing language or
/// codec metadata surface a [`MediaBridgeError::MissingStreamField`].
pub fn display_title(stream: &SubtitleStreamInfo) -> Result<String, MediaBridgeError> {
    let language = stream
        .language
        .as_deref()
        .ok_or_else(|| MediaBridgeError::MissingStreamField {
            field: "Language".to_string(),
        })?;
    let codec = stream
        .codec
        .as_deref()
        .ok_or_else(|| MediaBridgeError::MissingStreamField {
            field: "Codec".to_string(),
        })?;

    let forced = if stream.is_forced { " Forced" } else { "" };
    Ok(format!("{}{} ({})", capitalize(language), forced, codec))
}

// Uppercase first letter, lowercase the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
