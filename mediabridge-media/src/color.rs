//! Color-tag conversion between the player and server styling conventions
//!
//! The player styles subtitles with `#AARRGGBB` tags; the server's styling
//! schema uses `#rrggbb` with no alpha channel. Alpha is dropped going one
//! way and fixed to opaque coming back, so the transforms are inverses only
//! over the RGB portion.

use mediabridge_core::MediaBridgeError;

/// Convert a player `#AARRGGBB` tag to a server `#rrggbb` tag
///
/// Drops the alpha byte and lowercases the RGB portion.
pub fn player_to_style_color(color: &str) -> Result<String, MediaBridgeError> {
    if !is_hex_tag(color, 8) {
        return Err(MediaBridgeError::InvalidColor {
            value: color.to_string(),
            expected: "#AARRGGBB".to_string(),
        });
    }
    Ok(format!("#{}", color[3..].to_ascii_lowercase()))
}

/// Convert a server `#RRGGBB` tag to a player `#AARRGGBB` tag
///
/// Inserts an opaque `FF` alpha byte and uppercases the RGB portion.
pub fn style_to_player_color(color: &str) -> Result<String, MediaBridgeError> {
    if !is_hex_tag(color, 6) {
        return Err(MediaBridgeError::InvalidColor {
            value: color.to_string(),
            expected: "#RRGGBB".to_string(),
        });
    }
    Ok(format!("#FF{}", color[1..].to_ascii_uppercase()))
}

fn is_hex_tag(color: &str, digits: usize) -> bool {
    let Some(rest) = color.strip_prefix('#') else {
        return false;
    };
    rest.len() == digits && rest.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_to_style_drops_alpha_and_lowercases() {
        assert_eq!(player_to_style_color("#80A1B2C3").unwrap(), "#a1b2c3");
        assert_eq!(player_to_style_color("#FFFFFFFF").unwrap(), "#ffffff");
    }

    #[test]
    fn test_style_to_player_adds_opaque_alpha_and_uppercases() {
        assert_eq!(style_to_player_color("#a1b2c3").unwrap(), "#FFA1B2C3");
        assert_eq!(style_to_player_color("#000000").unwrap(), "#FF000000");
    }

    #[test]
    fn test_round_trip_preserves_rgb_and_fixes_alpha() {
        let rgb = player_to_style_color("#12ABCDEF").unwrap();
        let back = style_to_player_color(&rgb).unwrap();
        // Original alpha 0x12 is gone; RGB survives
        assert_eq!(back, "#FFABCDEF");
    }

    #[test]
    fn test_malformed_tags_are_rejected() {
        for bad in ["", "#", "#123", "80A1B2C3", "#GG11223344", "#80a1b2c3ff"] {
            let err = player_to_style_color(bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_COLOR");
        }
        for bad in ["", "#", "#12345", "a1b2c3", "#a1b2c3d4"] {
            assert!(style_to_player_color(bad).is_err());
        }
    }
}
