//! Hex color parsing for config values.

use regex::Regex;
use std::sync::LazyLock;

/// `#RRGGBB`, leading `#` optional.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Whether `s` is a 6-digit hex color.
pub fn is_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

/// Parse `#RRGGBB` into normalized `[f64; 3]` in 0.0..=1.0.
pub fn hex_to_rgb(hex: &str) -> Option<[f64; 3]> {
    let hex = hex.trim();
    if !is_hex_color(hex) {
        return None;
    }
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0])
}

/// sRGB transfer function: encoded channel in 0.0..=1.0 to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
