//! The two compositing operations.
//!
//! Both are pure image-to-image functions: they never touch the filesystem
//! and never mutate their input. [`calculations`](super::calculations) owns
//! the geometry; this module owns the pixels.
//!
//! | Step | Crate / function |
//! |---|---|
//! | Canvas fill | `RgbImage::from_pixel` / `RgbaImage::from_pixel` |
//! | Shadow rectangle + paste | `image::imageops::overlay` |
//! | Gaussian blur | `DynamicImage::blur` |

use super::calculations::{pad_basis, pad_geometry, shadow_geometry};
use super::params::{PadParams, ShadowParams};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage, imageops};

/// Build a solid-color canvas whose pixel mode follows `like`: sources with
/// an alpha channel get an RGBA canvas, everything else RGB.
fn solid_canvas(like: &DynamicImage, width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
    let Rgb([r, g, b]) = color;
    if like.color().has_alpha() {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])))
    } else {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color))
    }
}

/// Synthesize a blurred drop shadow behind `image`.
///
/// A background-colored canvas grows to fit the image plus its shadow
/// offset and border. A flat shadow rectangle the size of the image is
/// painted at the offset position, the whole canvas is Gaussian-blurred
/// (so the shadow fades into the background rather than sitting behind a
/// sharp edge), and the original image is pasted unblurred on the side
/// opposite the shadow's push direction.
///
/// A radius of zero skips the blur and leaves the rectangle edges sharp.
pub fn make_shadow(image: &DynamicImage, params: &ShadowParams) -> DynamicImage {
    let (width, height) = (image.width(), image.height());

    let dx = params.offset.0.resolve(width);
    let dy = params.offset.1.resolve(height);
    let border = params.border.resolve(width.max(height));
    let geometry = shadow_geometry(width, height, dx, dy, border);

    let mut composite = solid_canvas(
        image,
        geometry.canvas_width,
        geometry.canvas_height,
        params.bg_color,
    );

    let shadow_rect = solid_canvas(image, width, height, params.shadow_color);
    imageops::overlay(
        &mut composite,
        &shadow_rect,
        geometry.shadow_pos.0,
        geometry.shadow_pos.1,
    );

    if params.radius > 0 {
        composite = composite.blur(params.radius as f32);
    }

    imageops::overlay(&mut composite, image, geometry.image_pos.0, geometry.image_pos.1);

    composite
}

/// Pad onto a canvas matching the target aspect ratio.
///
/// The geometry is computed from `image` — the ORIGINAL source — while
/// `overlay` (normally the shadow composite, the source itself when absent)
/// is what actually gets pasted. Because the composite is larger than the
/// source by the shadow's offset and border, it overflows the centered box
/// and the shadow bleeds into the padding. That overflow is intentional.
pub fn add_padding(
    image: &DynamicImage,
    overlay: Option<&DynamicImage>,
    params: &PadParams,
) -> DynamicImage {
    let (width, height) = (image.width(), image.height());

    let pad = params.pad.resolve(pad_basis(width, height));
    let geometry = pad_geometry(width, height, pad, params.aspect_ratio);

    let mut canvas = solid_canvas(
        image,
        geometry.canvas_width,
        geometry.canvas_height,
        params.bg_color,
    );

    let top = overlay.unwrap_or(image);
    imageops::overlay(&mut canvas, top, geometry.image_pos.0, geometry.image_pos.1);

    canvas
}
