//! Camera pane: letterboxed raster, detection overlay, and cosmetic
//! dressing.
//!
//! The pane is a pixel grid of half-block cells (one terminal row = two
//! pixel rows). Geometry is recomputed from the pane's current size on
//! every draw, never cached, so resizes take effect on the next frame.
//! The detections drawn here come from the state stream's last-known list;
//! the raster they sit on may be older or newer — the two streams are only
//! correlated through shared last-known values.

use crate::themes::Theme;
use argus_core::calculations::confidence_tier;
use argus_core::formatting::{self, format_confidence};
use argus_core::geometry::{bracket_len, scan_line_row, Letterbox};
use argus_core::models::Detection;
use image::RgbImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Widget};

// ── CameraView ────────────────────────────────────────────────────────────────

/// One-shot widget drawing the camera pane.
pub struct CameraView<'a> {
    /// Last decoded raster, if any frame has ever arrived.
    pub frame: Option<&'a RgbImage>,
    /// Last-known detection list from the state stream.
    pub detections: &'a [Detection],
    /// Camera socket liveness; gates the offline placeholder regardless of
    /// whether frames are arriving.
    pub live: bool,
    /// Completed decodes in the last second.
    pub fps: usize,
    /// Wall-clock milliseconds driving the scan-line animation.
    pub epoch_ms: u128,
    pub theme: &'a Theme,
}

impl Widget for CameraView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(self.theme.panel_border)
            .title(ratatui::text::Span::styled(
                " CAMERA FEED ",
                self.theme.panel_title,
            ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height < 2 {
            return;
        }

        // Status bar: object count and clock, both live at render time.
        let status = format!(
            "◉ OBJECTS: {}  │  {}  │  {} FPS",
            self.detections.len(),
            formatting::clock_now(),
            self.fps
        );
        buf.set_stringn(
            inner.x,
            inner.y,
            status,
            inner.width as usize,
            self.theme.bold,
        );

        let image_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height - 1,
        };

        if !self.live {
            center_text(buf, image_area, "STREAM OFFLINE", self.theme.link_offline);
            return;
        }
        let Some(frame) = self.frame else {
            center_text(buf, image_area, "AWAITING SIGNAL", self.theme.placeholder);
            return;
        };

        // Half-block pixel grid over the image area.
        let grid_w = u32::from(image_area.width);
        let grid_h = u32::from(image_area.height) * 2;
        let Some(letterbox) = Letterbox::fit(frame.width(), frame.height(), grid_w, grid_h)
        else {
            return;
        };

        let mut canvas = PixelCanvas::new(grid_w, grid_h);
        canvas.blit(frame, &letterbox);

        canvas.hline(
            0,
            grid_w as i64 - 1,
            i64::from(scan_line_row(self.epoch_ms, grid_h)),
            rgb(self.theme.scan_line),
        );

        for detection in self.detections {
            let mapped = letterbox.map_bbox(detection.bbox);
            let color = rgb(self.theme.box_color(confidence_tier(detection.confidence)));
            draw_box(&mut canvas, mapped, color);
        }

        canvas.paint(image_area, buf);

        // Label chips live in cell space, over the painted pixels.
        for detection in self.detections {
            let mapped = letterbox.map_bbox(detection.bbox);
            draw_chip(buf, image_area, detection, mapped, self.theme);
        }
    }
}

fn center_text(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    let y = area.y + area.height / 2;
    let x = area.x + area.width.saturating_sub(text.chars().count() as u16) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

/// Outline plus the four corner brackets for one mapped bounding box.
fn draw_box(canvas: &mut PixelCanvas, mapped: [f64; 4], color: [u8; 3]) {
    let [x1, y1, x2, y2] = mapped.map(|v| v.round() as i64);
    canvas.rect_outline(x1, y1, x2, y2, color);

    let span = bracket_len((x2 - x1) as f64, (y2 - y1) as f64).round() as i64;
    let span = span.max(1);
    // Each bracket is the outline corner thickened one pixel inward.
    for (cx, cy, dx, dy) in [
        (x1, y1, 1_i64, 1_i64),
        (x2, y1, -1, 1),
        (x1, y2, 1, -1),
        (x2, y2, -1, -1),
    ] {
        canvas.hline(cx, cx + dx * span, cy + dy, color);
        canvas.vline(cy, cy + dy * span, cx + dx, color);
    }
}

/// `"<object> <confidence%>"` chip above the box's top-left corner.
fn draw_chip(
    buf: &mut Buffer,
    image_area: Rect,
    detection: &Detection,
    mapped: [f64; 4],
    theme: &Theme,
) {
    let color = theme.box_color(confidence_tier(detection.confidence));
    let text = format!(
        " {} {} ",
        detection.object,
        format_confidence(detection.confidence)
    );

    let cell_x = image_area.x + (mapped[0].round().max(0.0) as u16).min(image_area.width - 1);
    // One cell row above the top edge, clamped inside the pane.
    let row = (mapped[1].round().max(0.0) as u16 / 2).saturating_sub(1);
    let cell_y = image_area.y + row.min(image_area.height - 1);

    let remaining = (image_area.x + image_area.width).saturating_sub(cell_x);
    buf.set_stringn(
        cell_x,
        cell_y,
        text,
        remaining as usize,
        Style::default().fg(theme.chip_text).bg(color),
    );
}

fn rgb(color: Color) -> [u8; 3] {
    match color {
        Color::Rgb(r, g, b) => [r, g, b],
        _ => [255, 255, 255],
    }
}

// ── PixelCanvas ───────────────────────────────────────────────────────────────

/// RGB pixel buffer painted to the terminal as `▀` half-block cells.
struct PixelCanvas {
    width: u32,
    height: u32,
    px: Vec<[u8; 3]>,
}

impl PixelCanvas {
    /// All-black canvas; black is also the letterbox margin fill.
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            px: vec![[0, 0, 0]; (width * height) as usize],
        }
    }

    fn set(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        self.px[(y as u32 * self.width + x as u32) as usize] = color;
    }

    fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.px[(y * self.width + x) as usize]
    }

    fn hline(&mut self, x1: i64, x2: i64, y: i64, color: [u8; 3]) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set(x, y, color);
        }
    }

    fn vline(&mut self, y1: i64, y2: i64, x: i64, color: [u8; 3]) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set(x, y, color);
        }
    }

    fn rect_outline(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: [u8; 3]) {
        self.hline(x1, x2, y1, color);
        self.hline(x1, x2, y2, color);
        self.vline(y1, y2, x1, color);
        self.vline(y1, y2, x2, color);
    }

    /// Nearest-neighbour blit of `frame` into its letterboxed region.
    fn blit(&mut self, frame: &RgbImage, letterbox: &Letterbox) {
        let x0 = letterbox.x.round() as i64;
        let y0 = letterbox.y.round() as i64;
        let w = letterbox.width.round() as i64;
        let h = letterbox.height.round() as i64;

        for dy in 0..h {
            let src_y = ((dy as f64 / letterbox.scale_y) as u32).min(frame.height() - 1);
            for dx in 0..w {
                let src_x = ((dx as f64 / letterbox.scale_x) as u32).min(frame.width() - 1);
                let p = frame.get_pixel(src_x, src_y).0;
                self.set(x0 + dx, y0 + dy, p);
            }
        }
    }

    /// Paint the grid into `area`: each cell shows two vertically stacked
    /// pixels via `▀` with foreground = top, background = bottom.
    fn paint(&self, area: Rect, buf: &mut Buffer) {
        let rows = (area.height as u32).min(self.height.div_ceil(2));
        let cols = (area.width as u32).min(self.width);
        for row in 0..rows {
            for col in 0..cols {
                let top = self.get(col, row * 2);
                let bottom = if row * 2 + 1 < self.height {
                    self.get(col, row * 2 + 1)
                } else {
                    [0, 0, 0]
                };
                if let Some(cell) =
                    buf.cell_mut((area.x + col as u16, area.y + row as u16))
                {
                    cell.set_symbol("▀")
                        .set_fg(Color::Rgb(top[0], top[1], top[2]))
                        .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
        (area.x..area.x + area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    // ── PixelCanvas ───────────────────────────────────────────────────────

    #[test]
    fn test_canvas_starts_black() {
        let canvas = PixelCanvas::new(4, 4);
        assert_eq!(canvas.get(0, 0), [0, 0, 0]);
        assert_eq!(canvas.get(3, 3), [0, 0, 0]);
    }

    #[test]
    fn test_canvas_set_out_of_bounds_ignored() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set(-1, 0, [1, 2, 3]);
        canvas.set(0, 99, [1, 2, 3]);
        canvas.set(4, 0, [1, 2, 3]);
        assert!(canvas.px.iter().all(|p| *p == [0, 0, 0]));
    }

    #[test]
    fn test_rect_outline_edges_only() {
        let mut canvas = PixelCanvas::new(8, 8);
        let c = [9, 9, 9];
        canvas.rect_outline(1, 1, 6, 6, c);
        assert_eq!(canvas.get(1, 1), c);
        assert_eq!(canvas.get(6, 6), c);
        assert_eq!(canvas.get(3, 1), c);
        assert_eq!(canvas.get(1, 3), c);
        // Interior untouched.
        assert_eq!(canvas.get(3, 3), [0, 0, 0]);
    }

    #[test]
    fn test_blit_fills_letterbox_region_and_leaves_margins_black() {
        // 2x2 white frame into an 8x4 grid: drawn region is 4x4 centered,
        // columns 0-1 and 6-7 are margin.
        let frame = RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
        let letterbox = Letterbox::fit(2, 2, 8, 4).unwrap();
        let mut canvas = PixelCanvas::new(8, 4);
        canvas.blit(&frame, &letterbox);

        assert_eq!(canvas.get(0, 0), [0, 0, 0], "left margin");
        assert_eq!(canvas.get(7, 3), [0, 0, 0], "right margin");
        assert_eq!(canvas.get(2, 0), [255, 255, 255], "drawn region");
        assert_eq!(canvas.get(5, 3), [255, 255, 255], "drawn region");
    }

    // ── widget states ─────────────────────────────────────────────────────

    fn view<'a>(
        frame: Option<&'a RgbImage>,
        detections: &'a [Detection],
        live: bool,
        theme: &'a Theme,
    ) -> CameraView<'a> {
        CameraView {
            frame,
            detections,
            live,
            fps: 7,
            epoch_ms: 0,
            theme,
        }
    }

    #[test]
    fn test_offline_placeholder() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        view(None, &[], false, &theme).render(area, &mut buf);

        let all: String = (0..10).map(|y| row_text(&buf, area, y)).collect();
        assert!(all.contains("STREAM OFFLINE"));
    }

    #[test]
    fn test_awaiting_signal_before_first_frame() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        view(None, &[], true, &theme).render(area, &mut buf);

        let all: String = (0..10).map(|y| row_text(&buf, area, y)).collect();
        assert!(all.contains("AWAITING SIGNAL"));
        assert!(!all.contains("STREAM OFFLINE"));
    }

    #[test]
    fn test_status_bar_shows_object_count() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let detections = vec![Detection {
            object: "person".to_string(),
            confidence: 0.9,
            bbox: [0.0, 0.0, 8.0, 8.0],
        }];
        let frame = RgbImage::from_pixel(8, 8, image::Rgb([40, 40, 40]));
        view(Some(&frame), &detections, true, &theme).render(area, &mut buf);

        let status = row_text(&buf, area, 1);
        assert!(status.contains("OBJECTS: 1"), "status row: {status}");
        assert!(status.contains("7 FPS"), "status row: {status}");
    }

    #[test]
    fn test_frame_paints_half_blocks() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let frame = RgbImage::from_pixel(16, 16, image::Rgb([10, 20, 30]));
        view(Some(&frame), &[], true, &theme).render(area, &mut buf);

        // Some cell inside the image area carries the half-block symbol.
        let body: String = (2..9).map(|y| row_text(&buf, area, y)).collect();
        assert!(body.contains('▀'), "no half blocks painted: {body}");
    }
}
