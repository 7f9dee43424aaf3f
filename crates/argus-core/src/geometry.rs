//! Letterbox placement and coordinate-space mapping.
//!
//! The camera pane draws a native-resolution frame into a differently
//! proportioned pixel grid. Detections arrive in source-image pixel space
//! and must land on the letterboxed drawing region, so the transform keeps
//! independent X/Y scale factors plus the letterbox origin.

/// Placement of a frame inside a canvas, with the derived scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Left edge of the drawn region, canvas pixels.
    pub x: f64,
    /// Top edge of the drawn region, canvas pixels.
    pub y: f64,
    /// Drawn width in canvas pixels.
    pub width: f64,
    /// Drawn height in canvas pixels.
    pub height: f64,
    /// `drawn width / native width`.
    pub scale_x: f64,
    /// `drawn height / native height`.
    pub scale_y: f64,
}

impl Letterbox {
    /// Fit a `native_w × native_h` frame into a `canvas_w × canvas_h`
    /// canvas, preserving aspect ratio and centering. Margins are the
    /// caller's to fill with black.
    ///
    /// Returns `None` when either surface has a zero dimension.
    pub fn fit(native_w: u32, native_h: u32, canvas_w: u32, canvas_h: u32) -> Option<Letterbox> {
        if native_w == 0 || native_h == 0 || canvas_w == 0 || canvas_h == 0 {
            return None;
        }
        let (nw, nh) = (f64::from(native_w), f64::from(native_h));
        let (cw, ch) = (f64::from(canvas_w), f64::from(canvas_h));

        let scale = (cw / nw).min(ch / nh);
        let width = nw * scale;
        let height = nh * scale;

        Some(Letterbox {
            x: (cw - width) / 2.0,
            y: (ch - height) / 2.0,
            width,
            height,
            scale_x: width / nw,
            scale_y: height / nh,
        })
    }

    /// Map a `[x1, y1, x2, y2]` bounding box from source-image space into
    /// canvas space: `origin + coordinate × scale`, per axis.
    pub fn map_bbox(&self, bbox: [f64; 4]) -> [f64; 4] {
        [
            self.x + bbox[0] * self.scale_x,
            self.y + bbox[1] * self.scale_y,
            self.x + bbox[2] * self.scale_x,
            self.y + bbox[3] * self.scale_y,
        ]
    }
}

/// Corner-bracket span for a box of the given drawn size: 20 % of the
/// shorter dimension.
pub fn bracket_len(width: f64, height: f64) -> f64 {
    0.2 * width.min(height)
}

/// Vertical position of the decorative scan-line.
///
/// Cycles with wall-clock time modulo canvas height; the period is a
/// function of time only, never of frame or detection cadence.
pub fn scan_line_row(epoch_ms: u128, canvas_h: u32) -> u32 {
    if canvas_h == 0 {
        return 0;
    }
    ((epoch_ms / 10) % u128::from(canvas_h)) as u32
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── fitting ───────────────────────────────────────────────────────────

    #[test]
    fn test_fit_wide_canvas_pillarboxes() {
        // 640x480 frame into 200x75: height-constrained.
        let lb = Letterbox::fit(640, 480, 200, 75).unwrap();
        assert!((lb.height - 75.0).abs() < 1e-9);
        assert!((lb.width - 100.0).abs() < 1e-9);
        assert!((lb.x - 50.0).abs() < 1e-9);
        assert!((lb.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_tall_canvas_letterboxes() {
        // 640x480 frame into 64x480: width-constrained.
        let lb = Letterbox::fit(640, 480, 64, 480).unwrap();
        assert!((lb.width - 64.0).abs() < 1e-9);
        assert!((lb.height - 48.0).abs() < 1e-9);
        assert!((lb.x - 0.0).abs() < 1e-9);
        assert!((lb.y - 216.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_exact_aspect_fills_canvas() {
        let lb = Letterbox::fit(640, 480, 320, 240).unwrap();
        assert_eq!(lb.x, 0.0);
        assert_eq!(lb.y, 0.0);
        assert_eq!(lb.width, 320.0);
        assert_eq!(lb.height, 240.0);
        assert!((lb.scale_x - 0.5).abs() < 1e-12);
        assert!((lb.scale_y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fit_zero_dimension_is_none() {
        assert!(Letterbox::fit(0, 480, 100, 100).is_none());
        assert!(Letterbox::fit(640, 480, 0, 100).is_none());
        assert!(Letterbox::fit(640, 0, 100, 0).is_none());
    }

    // ── bbox mapping ──────────────────────────────────────────────────────

    #[test]
    fn test_map_bbox_is_exact_affine() {
        let lb = Letterbox::fit(640, 480, 200, 75).unwrap();
        let bbox = [64.0, 48.0, 320.0, 240.0];
        let mapped = lb.map_bbox(bbox);
        // Each axis independently: offset + coordinate * scale, exactly.
        assert_eq!(mapped[0], lb.x + 64.0 * lb.scale_x);
        assert_eq!(mapped[1], lb.y + 48.0 * lb.scale_y);
        assert_eq!(mapped[2], lb.x + 320.0 * lb.scale_x);
        assert_eq!(mapped[3], lb.y + 240.0 * lb.scale_y);
    }

    #[test]
    fn test_map_bbox_full_frame_covers_drawn_region() {
        let lb = Letterbox::fit(640, 480, 97, 53).unwrap();
        let mapped = lb.map_bbox([0.0, 0.0, 640.0, 480.0]);
        assert!((mapped[0] - lb.x).abs() < 1e-9);
        assert!((mapped[1] - lb.y).abs() < 1e-9);
        assert!((mapped[2] - (lb.x + lb.width)).abs() < 1e-9);
        assert!((mapped[3] - (lb.y + lb.height)).abs() < 1e-9);
    }

    // ── accents ───────────────────────────────────────────────────────────

    #[test]
    fn test_bracket_len_uses_shorter_dimension() {
        assert!((bracket_len(100.0, 40.0) - 8.0).abs() < 1e-12);
        assert!((bracket_len(40.0, 100.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_scan_line_cycles_with_time() {
        let h = 120;
        assert_eq!(scan_line_row(0, h), 0);
        assert_eq!(scan_line_row(10, h), 1);
        assert_eq!(scan_line_row(1200, h), 0);
        assert_eq!(scan_line_row(1210, h), 1);
    }

    #[test]
    fn test_scan_line_zero_height() {
        assert_eq!(scan_line_row(123_456, 0), 0);
    }
}
