//! Color specification parsing.
//!
//! Colors appear in two places — canvas background and shadow fill — and can
//! be given three ways:
//!
//! - a recognized name (`"white"`, `"black"`, `"gray"`)
//! - a hex string, 3 or 6 digits, with or without a leading `#`
//! - a raw `[r, g, b]` triple (config files only), passed through unchanged
//!
//! Resolution happens once, at config validation time, so a malformed color
//! fails the run before any image is touched.

use image::Rgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color {0:?}: expected a color name, or 3 or 6 hex digits")]
    InvalidColor(String),
}

/// Named colors recognized alongside hex strings.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("white", "FFFFFF"),
    ("black", "000000"),
    ("gray", "484848"),
];

/// A color as written by the user: either an already-resolved RGB triple or
/// a string still to be parsed.
///
/// The untagged representation lets config files write either
/// `bg_color = "#fff"` or `bg_color = [255, 255, 255]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Rgb([u8; 3]),
    Text(String),
}

impl ColorSpec {
    /// Resolve to an RGB triple. Triples pass through unchanged.
    pub fn resolve(&self) -> Result<Rgb<u8>, ColorError> {
        match self {
            ColorSpec::Rgb(channels) => Ok(Rgb(*channels)),
            ColorSpec::Text(spec) => parse_hex_color(spec),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(spec: &str) -> Self {
        ColorSpec::Text(spec.to_string())
    }
}

/// Parse a color name or hex string into an RGB triple.
///
/// Hex strings may carry a leading `#`. Three-digit shorthand expands by
/// doubling each digit (`"fff"` → `"ffffff"`). Any other length, or any
/// non-hex character, is [`ColorError::InvalidColor`].
pub fn parse_hex_color(spec: &str) -> Result<Rgb<u8>, ColorError> {
    if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == spec) {
        return parse_hex_color(hex);
    }

    let hex = spec.strip_prefix('#').unwrap_or(spec);
    if !hex.is_ascii() {
        return Err(ColorError::InvalidColor(spec.to_string()));
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return Err(ColorError::InvalidColor(spec.to_string())),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidColor(spec.to_string()))
    };

    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
