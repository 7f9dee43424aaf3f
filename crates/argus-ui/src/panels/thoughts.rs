//! Internal-thoughts log panel.

use crate::themes::Theme;
use argus_core::formatting::format_time_of_day;
use argus_core::models::ThoughtsState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

/// The backend's "recent" window rendered verbatim — no client trimming.
pub fn lines(thoughts: &ThoughtsState, theme: &Theme) -> Vec<Line<'static>> {
    if thoughts.recent.is_empty() {
        return vec![Line::from(Span::styled(
            "NO RECENT THOUGHTS",
            theme.placeholder,
        ))];
    }

    thoughts
        .recent
        .iter()
        .map(|t| {
            let content_style = if t.is_highlighted() {
                theme.thought_highlight
            } else {
                theme.thought
            };
            let mut spans = Vec::new();
            let time = format_time_of_day(&t.timestamp);
            if !time.is_empty() {
                spans.push(Span::styled(format!("[{time}] "), theme.dim));
            }
            if !t.category.is_empty() {
                spans.push(Span::styled(
                    format!("({}) ", t.category),
                    theme.thought_category,
                ));
            }
            spans.push(Span::styled(t.content.clone(), content_style));
            Line::from(spans)
        })
        .collect()
}

/// Render, pinned to the tail: the log auto-scrolls on every update.
pub fn render(frame: &mut Frame, area: Rect, thoughts: &ThoughtsState, theme: &Theme) {
    super::render_lines(frame, area, " INNER THOUGHTS ", lines(thoughts, theme), true, theme);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
