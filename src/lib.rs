//! # Shadow Pad
//!
//! Batch drop-shadow and aspect-ratio padding for social-media image
//! exports. Point it at an image or a folder of images and every file
//! comes out on a fixed-proportion canvas with a soft shadow floating it
//! off the background.
//!
//! # Architecture: Two Transforms, One Batch Loop
//!
//! Per file, two pure image-to-image transforms compose into the pipeline:
//!
//! ```text
//! decode → make_shadow → add_padding → encode
//!          (blurred drop   (fixed-aspect
//!           shadow behind    canvas, content
//!           the image)       centered)
//! ```
//!
//! Everything around that chain is plumbing: config resolution up front,
//! flat file discovery, and a rayon worker pool mapping the chain over the
//! file list. Files are fully independent — no shared mutable state, no
//! ordering guarantee — which is what makes the parallelism trivially safe.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`color`] | Color spec parsing: names, hex strings, raw triples |
//! | [`config`] | Options struct, TOML loading, CLI merge, eager validation |
//! | [`imaging`] | The two transforms plus their pure geometry and parameter types |
//! | [`scan`] | Flat input discovery and output path layout |
//! | [`process`] | Batch driver: rayon map, per-file failure isolation |
//! | [`output`] | CLI progress and summary formatting |
//!
//! # Design Decisions
//!
//! ## Validate Before Touching Pixels
//!
//! Colors, the aspect ratio, and the worker count are parsed when the run
//! starts, never per file. A typo in `--bg-color` fails in milliseconds
//! instead of after half the batch has been written.
//!
//! ## One Bad File Never Kills the Batch
//!
//! Decode and encode failures are collected per file and reported at the
//! end; the remaining files still come out. The process exit code reflects
//! the aggregate, so scripts notice without losing the good outputs.
//!
//! ## The Shadow Bleeds Into the Padding
//!
//! The aspect canvas is sized and positioned from the ORIGINAL image's
//! dimensions while the pasted content is the larger shadow composite.
//! The composite therefore overflows the centered box by the shadow's
//! offset and border — the shadow reaches into the padding instead of
//! being boxed in with the image. That overflow is the intended look.
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work goes through the `image` crate: decoding, the Gaussian
//! blur, `overlay` compositing, and encoding. No ImageMagick, no system
//! dependencies; the binary is fully self-contained.

pub mod color;
pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
