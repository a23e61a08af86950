//! Run configuration: loading, merging, and validation.
//!
//! Options layer: built-in defaults are overridden by an optional TOML
//! file, which is overridden by CLI flags.
//! Validation happens once, up front, so a malformed color or aspect ratio
//! fails the run before any file is read.
//!
//! ## Config File
//!
//! Pass `--config path.toml`, or drop a `shadow-pad.toml` next to the input:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_folder = "padded"   # Where outputs are written
//! use_subfolder = true       # Nest the output folder under the input's directory
//! aspect_ratio = "4x5"       # Target proportion, "WxH"
//! shadow_offset = 33         # Pixels; a float (e.g. 0.05) is a ratio of the image side
//! pad = 100                  # Pixels; a float is a ratio of the padded side
//! radius = 15                # Gaussian blur radius for the shadow (0 = sharp)
//! bg_color = "white"         # Name, hex string, or [r, g, b]
//! shadow_color = "gray"
//! jobs = "all"               # Worker count; "all", -1, or 0 use every core
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only push the shadow further out
//! shadow_offset = 60
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::color::{ColorError, ColorSpec};
use crate::imaging::{Extent, PadParams, Parallelism, ShadowParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid aspect ratio {0:?}: expected \"WxH\" with positive integers")]
    InvalidAspectRatio(String),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("Invalid jobs value {0:?}: expected a worker count or \"all\"")]
    InvalidJobs(String),
}

/// Name of the config file looked up next to the input when `--config` is
/// not given.
pub const CONFIG_FILE_NAME: &str = "shadow-pad.toml";

/// Run options as written by the user.
///
/// All fields have defaults matching the stock export settings. Use
/// [`Options::validate`] to turn this into the resolved per-image
/// parameters; nothing downstream accepts an unvalidated `Options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Output folder name (or path when `use_subfolder` is off).
    pub output_folder: String,
    /// Nest the output folder under the input's own directory.
    pub use_subfolder: bool,
    /// Target proportion of the padded canvas, `"WxH"`.
    pub aspect_ratio: String,
    /// Shadow displacement, applied to both axes.
    pub shadow_offset: Extent,
    /// Padding around the image on the aspect canvas.
    pub pad: Extent,
    /// Gaussian blur radius for the shadow.
    pub radius: u32,
    /// Canvas background color.
    pub bg_color: ColorSpec,
    /// Shadow fill color.
    pub shadow_color: ColorSpec,
    /// Parallel worker count.
    pub jobs: Parallelism,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_folder: "padded".to_string(),
            use_subfolder: true,
            aspect_ratio: "4x5".to_string(),
            shadow_offset: Extent::Pixels(33),
            pad: Extent::Pixels(100),
            radius: 15,
            bg_color: "white".into(),
            shadow_color: "gray".into(),
            jobs: Parallelism::all(),
        }
    }
}

/// CLI-side overrides, applied on top of file/default options.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_folder: Option<String>,
    pub use_subfolder: Option<bool>,
    pub aspect_ratio: Option<String>,
    pub shadow_offset: Option<Extent>,
    pub pad: Option<Extent>,
    pub radius: Option<u32>,
    pub bg_color: Option<String>,
    pub shadow_color: Option<String>,
    pub jobs: Option<Parallelism>,
}

impl Options {
    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the config file next to the input if one exists, else defaults.
    ///
    /// For a directory input the lookup is inside that directory; for a
    /// file input, next to the file.
    pub fn load_for_input(input: &Path) -> Result<Self, ConfigError> {
        let dir = if input.is_dir() {
            input
        } else {
            input.parent().unwrap_or(Path::new("."))
        };
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply CLI overrides in place.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(v) = &overrides.output_folder {
            self.output_folder = v.clone();
        }
        if let Some(v) = overrides.use_subfolder {
            self.use_subfolder = v;
        }
        if let Some(v) = &overrides.aspect_ratio {
            self.aspect_ratio = v.clone();
        }
        if let Some(v) = overrides.shadow_offset {
            self.shadow_offset = v;
        }
        if let Some(v) = overrides.pad {
            self.pad = v;
        }
        if let Some(v) = overrides.radius {
            self.radius = v;
        }
        if let Some(v) = &overrides.bg_color {
            self.bg_color = v.as_str().into();
        }
        if let Some(v) = &overrides.shadow_color {
            self.shadow_color = v.as_str().into();
        }
        if let Some(v) = &overrides.jobs {
            self.jobs = v.clone();
        }
    }

    /// Validate everything user-written and resolve to per-image parameters.
    ///
    /// Colors and the aspect ratio are parsed here, eagerly, so the batch
    /// never starts with a config that would fail mid-run.
    pub fn validate(&self) -> Result<PipelineParams, ConfigError> {
        let aspect_ratio = parse_aspect_ratio(&self.aspect_ratio)?;
        let bg_color = self.bg_color.resolve()?;
        let shadow_color = self.shadow_color.resolve()?;
        if let Parallelism::Keyword(word) = &self.jobs
            && !word.eq_ignore_ascii_case("all")
        {
            return Err(ConfigError::InvalidJobs(word.clone()));
        }

        Ok(PipelineParams {
            shadow: ShadowParams {
                offset: (self.shadow_offset, self.shadow_offset),
                border: self.shadow_offset,
                bg_color,
                shadow_color,
                radius: self.radius,
            },
            pad: PadParams {
                pad: self.pad,
                aspect_ratio,
                bg_color,
            },
        })
    }
}

/// Resolved, validated parameters for the per-image pipeline.
///
/// The shadow offset doubles as its border, matching the stock export
/// behavior: the margin past the shadow equals the shadow's displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineParams {
    pub shadow: ShadowParams,
    pub pad: PadParams,
}

/// Parse a `"WxH"` aspect ratio string into a positive integer pair.
///
/// Whitespace is ignored and the separator is case-insensitive, so
/// `"4 x 5"` and `"4X5"` both parse.
pub fn parse_aspect_ratio(spec: &str) -> Result<(u32, u32), ConfigError> {
    let compact: String = spec.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || ConfigError::InvalidAspectRatio(spec.to_string());

    let (w, h) = compact
        .to_ascii_lowercase()
        .split_once('x')
        .map(|(w, h)| (w.to_string(), h.to_string()))
        .ok_or_else(invalid)?;

    let w: u32 = w.parse().map_err(|_| invalid())?;
    let h: u32 = h.parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

/// Stock config file with all options documented, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    r##"# shadow-pad configuration
# All options are optional - the values below are the defaults.

# Where outputs are written. With use_subfolder on, this folder is created
# inside the input's own directory.
output_folder = "padded"
use_subfolder = true

# Target proportion of the padded canvas, "WxH".
aspect_ratio = "4x5"

# Shadow displacement. An integer is pixels; a float (e.g. 0.05) is a
# ratio of the image side. The margin past the shadow uses the same value.
shadow_offset = 33

# Padding around the image on the aspect canvas. Integer pixels or a
# float ratio of the padded side.
pad = 100

# Gaussian blur radius for the shadow. 0 keeps the shadow edges sharp.
radius = 15

# Colors accept a name (white, black, gray), a hex string with optional
# leading "#" (3 or 6 digits), or an [r, g, b] triple.
bg_color = "white"
shadow_color = "gray"

# Parallel workers. "all", -1, or 0 use every core; positive counts are
# clamped to the core count.
jobs = "all"
"##
    .to_string()
}
