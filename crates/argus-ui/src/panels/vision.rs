//! Scene-description panel.

use crate::themes::Theme;
use argus_core::formatting::format_time_of_day;
use argus_core::models::VisionState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub fn lines(vision: &VisionState, theme: &Theme) -> Vec<Line<'static>> {
    if vision.description.is_empty() {
        return vec![Line::from(Span::styled(
            "NO SCENE DESCRIPTION YET",
            theme.placeholder,
        ))];
    }

    let mut out = vec![Line::from(Span::styled(
        vision.description.clone(),
        theme.text,
    ))];
    let updated = format_time_of_day(&vision.last_update);
    if !updated.is_empty() {
        out.push(Line::from(Span::styled(
            format!("updated {updated}"),
            theme.dim,
        )));
    }
    out
}

pub fn render(frame: &mut Frame, area: Rect, vision: &VisionState, theme: &Theme) {
    super::render_lines(frame, area, " VISION ", lines(vision, theme), false, theme);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
