//! Pure geometry for card rendering.
//!
//! All functions here are pure and testable without any I/O or images.

use serde::{Deserialize, Serialize};

/// Fixed card geometry, in pixels.
///
/// A card is one horizontal strip: thumbnail on the left, stats panel in the
/// middle, workshop badge icon on the right. The regions are configuration,
/// not computed from content — every card in a showcase has identical
/// dimensions regardless of what the preview image or title look like.
///
/// ```text
/// |<-- thumb_width -->|pad|<------ info_width() ------>|<- icon_width ->|
/// |                   |   |                            |                |
/// |     thumbnail     |   |  title + views/downloads/  |  steam badge   |
/// |     (contain)     |   |  favorites                 |                |
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardLayout {
    /// Total card width including thumbnail, padding and badge icon.
    pub total_width: u32,
    /// Card height; thumbnail and panel share it.
    pub height: u32,
    /// Width of the thumbnail canvas on the left.
    pub thumb_width: u32,
    /// Horizontal gap between thumbnail and stats panel.
    pub padding: u32,
    /// Width reserved for the badge icon on the right.
    pub icon_width: u32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            total_width: 846,
            height: 100,
            thumb_width: 150,
            padding: 8,
            icon_width: 32,
        }
    }
}

impl CardLayout {
    /// Width left over for the stats panel.
    pub fn info_width(&self) -> u32 {
        self.total_width
            .saturating_sub(self.thumb_width)
            .saturating_sub(self.padding)
            .saturating_sub(self.icon_width)
    }
}

/// Placement of a source image scaled to fit inside a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitTransform {
    pub scaled_w: u32,
    pub scaled_h: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Compute an aspect-fit (contain) transform.
///
/// Scales the source uniformly by `min(canvas_w / src_w, canvas_h / src_h)`
/// and centers it, letterboxing the shorter axis. The full source stays
/// visible — never cropped, never stretched.
///
/// Guarantees on both axes: `offset + scaled <= canvas` and the image is
/// centered (`offset == (canvas - scaled) / 2`).
pub fn fit_contain(source: (u32, u32), canvas: (u32, u32)) -> FitTransform {
    let (src_w, src_h) = source;
    let (canvas_w, canvas_h) = canvas;

    if src_w == 0 || src_h == 0 {
        // Degenerate source; nothing to place.
        return FitTransform {
            scaled_w: 0,
            scaled_h: 0,
            offset_x: canvas_w / 2,
            offset_y: canvas_h / 2,
        };
    }

    let scale = (canvas_w as f64 / src_w as f64).min(canvas_h as f64 / src_h as f64);

    // Rounding may tip one axis a pixel over the canvas; clamp it back.
    let scaled_w = ((src_w as f64 * scale).round() as u32).min(canvas_w);
    let scaled_h = ((src_h as f64 * scale).round() as u32).min(canvas_h);

    FitTransform {
        scaled_w,
        scaled_h,
        offset_x: (canvas_w - scaled_w) / 2,
        offset_y: (canvas_h - scaled_h) / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // fit_contain tests
    // =========================================================================

    #[test]
    fn fit_wide_source_letterboxes_vertically() {
        // 300x100 into 150x100: scale 0.5 → 150x50, centered vertically
        let t = fit_contain((300, 100), (150, 100));
        assert_eq!(t.scaled_w, 150);
        assert_eq!(t.scaled_h, 50);
        assert_eq!(t.offset_x, 0);
        assert_eq!(t.offset_y, 25);
    }

    #[test]
    fn fit_tall_source_letterboxes_horizontally() {
        // 100x400 into 150x100: scale 0.25 → 25x100, centered horizontally
        let t = fit_contain((100, 400), (150, 100));
        assert_eq!(t.scaled_w, 25);
        assert_eq!(t.scaled_h, 100);
        assert_eq!(t.offset_x, 62);
        assert_eq!(t.offset_y, 0);
    }

    #[test]
    fn fit_exact_aspect_fills_canvas() {
        let t = fit_contain((300, 200), (150, 100));
        assert_eq!(t.scaled_w, 150);
        assert_eq!(t.scaled_h, 100);
        assert_eq!(t.offset_x, 0);
        assert_eq!(t.offset_y, 0);
    }

    #[test]
    fn fit_small_source_upscales() {
        // 30x20 into 150x100: scale 5 → fills the canvas
        let t = fit_contain((30, 20), (150, 100));
        assert_eq!(t.scaled_w, 150);
        assert_eq!(t.scaled_h, 100);
    }

    #[test]
    fn fit_never_exceeds_canvas_bounds() {
        // Property check across a spread of aspect ratios, both canvases.
        let sources = [
            (1, 1),
            (1, 1000),
            (1000, 1),
            (637, 358),
            (358, 637),
            (1920, 1080),
            (99, 101),
        ];
        for canvas in [(150, 100), (178, 100), (846, 100)] {
            for src in sources {
                let t = fit_contain(src, canvas);
                assert!(t.offset_x + t.scaled_w <= canvas.0, "{src:?} in {canvas:?}");
                assert!(t.offset_y + t.scaled_h <= canvas.1, "{src:?} in {canvas:?}");
            }
        }
    }

    #[test]
    fn fit_centers_on_the_letterboxed_axis() {
        let t = fit_contain((400, 100), (150, 100));
        // Symmetric within one pixel of integer division
        let bottom_gap = 100 - (t.offset_y + t.scaled_h);
        assert!(bottom_gap >= t.offset_y);
        assert!(bottom_gap - t.offset_y <= 1);
    }

    #[test]
    fn fit_degenerate_source_is_empty() {
        let t = fit_contain((0, 100), (150, 100));
        assert_eq!(t.scaled_w, 0);
        assert_eq!(t.scaled_h, 0);
    }

    // =========================================================================
    // CardLayout tests
    // =========================================================================

    #[test]
    fn default_layout_info_width() {
        let layout = CardLayout::default();
        // 846 - 150 - 8 - 32
        assert_eq!(layout.info_width(), 656);
    }

    #[test]
    fn info_width_saturates_for_narrow_cards() {
        let layout = CardLayout {
            total_width: 100,
            thumb_width: 150,
            ..CardLayout::default()
        };
        assert_eq!(layout.info_width(), 0);
    }
}
