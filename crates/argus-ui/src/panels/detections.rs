//! Detections list panel.

use crate::components::meter;
use crate::themes::Theme;
use argus_core::calculations::confidence_tier;
use argus_core::formatting::format_confidence;
use argus_core::models::YoloState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

/// Maximum rows rendered; anything past this is simply not shown.
pub const MAX_ROWS: usize = 15;

const BAR_WIDTH: u16 = 10;

/// Rows in input order, one per detection, capped at [`MAX_ROWS`].
///
/// No sorting: the list reads exactly as the backend sent it.
pub fn lines(yolo: &YoloState, theme: &Theme) -> Vec<Line<'static>> {
    if yolo.detections.is_empty() {
        return vec![Line::from(Span::styled(
            "NO OBJECTS IN VIEW",
            theme.placeholder,
        ))];
    }

    yolo.detections
        .iter()
        .take(MAX_ROWS)
        .map(|d| {
            let tier = confidence_tier(d.confidence);
            let [filled, empty] = meter::fill_bar(d.confidence, BAR_WIDTH, tier, theme);
            Line::from(vec![
                Span::styled(format!("{:<12}", d.object), theme.text),
                Span::styled(
                    format!("{:>4} ", format_confidence(d.confidence)),
                    theme.tier_style(tier),
                ),
                filled,
                empty,
            ])
        })
        .collect()
}

/// Panel title; flags a backend-reported scene change.
pub fn title(yolo: &YoloState) -> String {
    if yolo.scene_changed {
        " DETECTIONS ◆ SCENE CHANGE ".to_string()
    } else {
        " DETECTIONS ".to_string()
    }
}

pub fn render(frame: &mut Frame, area: Rect, yolo: &YoloState, theme: &Theme) {
    super::render_lines(frame, area, &title(yolo), lines(yolo, theme), false, theme);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
