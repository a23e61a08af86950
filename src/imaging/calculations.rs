//! Pure calculation functions for canvas geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//! Positions are signed: a pathological aspect ratio can push the overlay
//! partly off-canvas, and the paste step crops it there instead of failing.

/// Geometry of the shadow composite canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Top-left corner of the flat shadow rectangle.
    pub shadow_pos: (i64, i64),
    /// Top-left corner of the sharp source image, opposite the shadow's
    /// push direction.
    pub image_pos: (i64, i64),
}

/// Compute the shadow canvas layout for a `width`×`height` image.
///
/// The canvas grows by the offset magnitude plus the border:
/// `(width + |dx| + border, height + |dy| + border)`. A positive offset
/// pushes the shadow right/down; a negative one pushes the image instead,
/// so the shadow falls on the opposite side. Dimensions are floored at 1
/// so a large negative border cannot produce an empty canvas.
///
/// # Examples
/// ```
/// # use shadow_pad::imaging::shadow_geometry;
/// let g = shadow_geometry(100, 80, 10, -5, 3);
/// assert_eq!((g.canvas_width, g.canvas_height), (113, 88));
/// assert_eq!(g.shadow_pos, (10, 0));
/// assert_eq!(g.image_pos, (0, 5));
/// ```
pub fn shadow_geometry(width: u32, height: u32, dx: i32, dy: i32, border: i32) -> ShadowGeometry {
    let dx = dx as i64;
    let dy = dy as i64;
    let border = border as i64;

    ShadowGeometry {
        canvas_width: (width as i64 + dx.abs() + border).max(1) as u32,
        canvas_height: (height as i64 + dy.abs() + border).max(1) as u32,
        shadow_pos: (dx.max(0), dy.max(0)),
        image_pos: ((-dx).max(0), (-dy).max(0)),
    }
}

/// Geometry of the aspect-ratio canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Paste position computed against the ORIGINAL image's dimensions.
    /// The overlay (shadow composite) is larger and deliberately overflows
    /// this box.
    pub image_pos: (i64, i64),
}

/// The side a ratio-valued pad resolves against: the padded axis.
///
/// Landscape images pad along the width, portrait and square images along
/// the height.
pub fn pad_basis(width: u32, height: u32) -> u32 {
    if width > height { width } else { height }
}

/// Compute the aspect canvas layout for a `width`×`height` source image.
///
/// Branches strictly on the source's width vs height:
///
/// - Landscape: `new_width = width + 2·pad`, height derived from the
///   aspect ratio, content centered vertically.
/// - Portrait: mirror of landscape.
/// - Square: both sides grow by `2·pad` and the aspect ratio is ignored;
///   the content sits centered at `(pad, pad)`.
///
/// The derived axis rounds to the nearest integer. Dimensions are floored
/// at 1.
///
/// # Examples
/// ```
/// # use shadow_pad::imaging::pad_geometry;
/// let g = pad_geometry(1000, 500, 50, (4, 5));
/// assert_eq!((g.canvas_width, g.canvas_height), (1100, 880));
/// assert_eq!(g.image_pos, (50, 190));
/// ```
pub fn pad_geometry(width: u32, height: u32, pad: i32, aspect_ratio: (u32, u32)) -> PadGeometry {
    let w = width as i64;
    let h = height as i64;
    let pad = pad as i64;
    let (ar_w, ar_h) = (aspect_ratio.0 as f64, aspect_ratio.1 as f64);

    let (new_width, new_height, image_pos) = if width > height {
        // landscape: pad the width, derive the height
        let new_width = (w + 2 * pad).max(1);
        let new_height = ((new_width as f64 / ar_h * ar_w).round() as i64).max(1);
        (new_width, new_height, (pad, (new_height - h) / 2))
    } else if width < height {
        // portrait: pad the height, derive the width
        let new_height = (h + 2 * pad).max(1);
        let new_width = ((new_height as f64 / ar_h * ar_w).round() as i64).max(1);
        (new_width, new_height, ((new_width - w) / 2, pad))
    } else {
        // square: grow both sides, aspect ratio does not apply
        let new_side = (w + 2 * pad).max(1);
        (new_side, new_side, (pad, pad))
    };

    PadGeometry {
        canvas_width: new_width as u32,
        canvas_height: new_height as u32,
        image_pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // shadow_geometry tests
    // =========================================================================

    #[test]
    fn shadow_canvas_grows_by_offset_and_border() {
        let g = shadow_geometry(1000, 500, 33, 33, 33);
        assert_eq!(g.canvas_width, 1066);
        assert_eq!(g.canvas_height, 566);
    }

    #[test]
    fn shadow_dimensions_for_all_offset_signs() {
        for (dx, dy) in [(20, 10), (-20, 10), (20, -10), (-20, -10)] {
            let g = shadow_geometry(100, 80, dx, dy, 5);
            assert_eq!(g.canvas_width, 125, "dx={dx} dy={dy}");
            assert_eq!(g.canvas_height, 95, "dx={dx} dy={dy}");
        }
    }

    #[test]
    fn positive_offset_pushes_shadow() {
        let g = shadow_geometry(100, 80, 20, 10, 0);
        assert_eq!(g.shadow_pos, (20, 10));
        assert_eq!(g.image_pos, (0, 0));
    }

    #[test]
    fn negative_offset_pushes_image() {
        let g = shadow_geometry(100, 80, -20, -10, 0);
        assert_eq!(g.shadow_pos, (0, 0));
        assert_eq!(g.image_pos, (20, 10));
    }

    #[test]
    fn mixed_offset_signs_split_the_push() {
        let g = shadow_geometry(100, 80, 20, -10, 0);
        assert_eq!(g.shadow_pos, (20, 0));
        assert_eq!(g.image_pos, (0, 10));
    }

    #[test]
    fn zero_offset_zero_border_degenerates_to_source_size() {
        let g = shadow_geometry(100, 80, 0, 0, 0);
        assert_eq!((g.canvas_width, g.canvas_height), (100, 80));
        assert_eq!(g.shadow_pos, (0, 0));
        assert_eq!(g.image_pos, (0, 0));
    }

    #[test]
    fn negative_border_shrinks_but_never_empties() {
        let g = shadow_geometry(10, 10, 0, 0, -100);
        assert_eq!((g.canvas_width, g.canvas_height), (1, 1));
    }

    // =========================================================================
    // pad_geometry tests
    // =========================================================================

    #[test]
    fn landscape_pads_width_and_derives_height() {
        // 1000x500, pad 50, 4x5 → 1100 wide, 1100/5*4 = 880 tall
        let g = pad_geometry(1000, 500, 50, (4, 5));
        assert_eq!((g.canvas_width, g.canvas_height), (1100, 880));
        assert_eq!(g.image_pos, (50, (880 - 500) / 2));
    }

    #[test]
    fn portrait_pads_height_and_derives_width() {
        // 500x1000, pad 50, 4x5 → 1100 tall, 880 wide
        let g = pad_geometry(500, 1000, 50, (4, 5));
        assert_eq!((g.canvas_width, g.canvas_height), (880, 1100));
        assert_eq!(g.image_pos, ((880 - 500) / 2, 50));
    }

    #[test]
    fn square_ignores_aspect_and_centers() {
        let g = pad_geometry(600, 600, 40, (4, 5));
        assert_eq!((g.canvas_width, g.canvas_height), (680, 680));
        assert_eq!(g.image_pos, (40, 40));
    }

    #[test]
    fn derived_axis_rounds_to_nearest() {
        // 99x50, pad 0, 1x3 → width 99, height round(33) = 33
        let g = pad_geometry(99, 50, 0, (1, 3));
        assert_eq!(g.canvas_height, 33);
    }

    #[test]
    fn extreme_aspect_yields_negative_centering_offset() {
        // 1000x500, 1x10 → canvas 1100x110, image pushed above the top edge
        let g = pad_geometry(1000, 500, 50, (1, 10));
        assert_eq!((g.canvas_width, g.canvas_height), (1100, 110));
        assert_eq!(g.image_pos.1, (110 - 500) / 2);
        assert!(g.image_pos.1 < 0);
    }

    #[test]
    fn pad_basis_follows_the_padded_axis() {
        assert_eq!(pad_basis(1000, 500), 1000);
        assert_eq!(pad_basis(500, 1000), 1000);
        assert_eq!(pad_basis(600, 600), 600);
    }
}
