//! Image compositing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Shadow synthesis** | solid canvas + `imageops::overlay` + `DynamicImage::blur` |
//! | **Aspect padding** | solid canvas + `imageops::overlay` |
//! | **Geometry** | pure functions in [`calculations`] |
//!
//! The module is split into:
//! - **Calculations**: pure functions for canvas geometry (unit testable)
//! - **Parameters**: data structures describing the operations
//! - **Operations**: [`make_shadow`] and [`add_padding`], the two
//!   image-to-image transforms the batch driver composes per file

mod calculations;
pub mod operations;
mod params;

pub use calculations::{PadGeometry, ShadowGeometry, pad_basis, pad_geometry, shadow_geometry};
pub use operations::{add_padding, make_shadow};
pub use params::{Extent, PadParams, Parallelism, ShadowParams};
