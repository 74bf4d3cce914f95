//! Color parsing for theme files.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.

mod parse;


use phyllo_common::{Color, ConfigError, Rgb};

use parse::{parse_hex, parse_rgba, HEX_RE, RGBA_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgba(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Parse straight to normalized RGB, discarding alpha.
pub fn parse_rgb(s: &str) -> Result<Rgb, ConfigError> {
    parse_color(s).map(|c| c.to_rgb())
}

/// Whether a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s);
    }
    false
}
