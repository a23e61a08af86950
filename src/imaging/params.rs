//! Parameter types for the compositing operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`config`](crate::config) (which parses and validates
//! user input) and [`operations`](super::operations) (which does the actual
//! pixel work). Colors arrive here already resolved — a params struct can
//! only be built from a config that validated.
//!
//! ## Types
//!
//! - [`Extent`] — a length given as absolute pixels or as a ratio of an
//!   image side, resolved to pixels per image.
//! - [`Parallelism`] — worker count, `"all"`/`-1` meaning every core.
//! - [`ShadowParams`] — offset, border, colors, and blur radius for the
//!   shadow composite.
//! - [`PadParams`] — pad, aspect ratio, and background for the aspect canvas.

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A length that is either an absolute pixel count or a fraction of an
/// image side, decided per image at processing time.
///
/// Written as an integer (`33`) for pixels or a float (`0.1`) for a ratio,
/// both on the command line and in `config.toml`. Negative values are legal
/// for offsets and flip which side the shadow falls on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    Pixels(i32),
    Ratio(f32),
}

impl Extent {
    /// Resolve to pixels against the given side length.
    ///
    /// Ratios truncate toward zero, matching integer conversion everywhere
    /// else in the pipeline.
    pub fn resolve(self, basis: u32) -> i32 {
        match self {
            Extent::Pixels(px) => px,
            Extent::Ratio(ratio) => (ratio * basis as f32) as i32,
        }
    }
}

impl FromStr for Extent {
    type Err = String;

    /// `"33"` → pixels, `"0.1"` → ratio. Tried in that order, so a bare
    /// integer is always pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(px) = s.parse::<i32>() {
            return Ok(Extent::Pixels(px));
        }
        s.parse::<f32>()
            .map(Extent::Ratio)
            .map_err(|_| format!("expected an integer pixel count or a float ratio, got {s:?}"))
    }
}

/// Worker count for the batch pool.
///
/// `"all"`, `-1`, or `0` mean every available core. Positive counts are
/// clamped down to the core count — a user can constrain down, not up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parallelism {
    Count(i64),
    Keyword(String),
}

impl Parallelism {
    pub fn all() -> Self {
        Parallelism::Keyword("all".to_string())
    }

    /// True when this selects every available core.
    pub fn is_all(&self) -> bool {
        match self {
            Parallelism::Count(n) => *n <= 0,
            Parallelism::Keyword(_) => true,
        }
    }

    /// Resolve the effective worker count against the machine's cores.
    pub fn effective_jobs(&self) -> usize {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        match self {
            Parallelism::Count(n) if *n > 0 => (*n as usize).min(cores),
            _ => cores,
        }
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Parallelism::all()
    }
}

impl FromStr for Parallelism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Parallelism::all());
        }
        s.parse::<i64>()
            .map(Parallelism::Count)
            .map_err(|_| format!("expected a worker count or \"all\", got {s:?}"))
    }
}

/// Full specification for the shadow composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    /// Shadow displacement `(dx, dy)`. Ratio components resolve against the
    /// image's width (dx) and height (dy).
    pub offset: (Extent, Extent),
    /// Extra margin beyond the offset. A ratio resolves against the longer
    /// side of the image.
    pub border: Extent,
    pub bg_color: Rgb<u8>,
    pub shadow_color: Rgb<u8>,
    /// Gaussian blur radius. Zero skips the blur entirely.
    pub radius: u32,
}

/// Full specification for the aspect-ratio canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadParams {
    /// Padding on the non-derived axis. A ratio resolves against the side
    /// the branch pads (width for landscape, height otherwise).
    pub pad: Extent,
    /// Target proportion as the `(w, h)` pair parsed from `"WxH"`.
    pub aspect_ratio: (u32, u32),
    pub bg_color: Rgb<u8>,
}
