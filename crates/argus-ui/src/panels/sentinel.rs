//! Sentinel / module-health panel.

use crate::themes::Theme;
use argus_core::formatting::{self, ERROR_DISPLAY_LEN};
use argus_core::models::{HealthState, StateSnapshot, SENTINEL_MODULES};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

/// One line per module in the fixed sentinel set.
///
/// A module the backend omitted classifies as idle, indistinguishable from
/// one that reported nothing wrong and nothing active.
pub fn lines(snapshot: &StateSnapshot, theme: &Theme) -> Vec<Line<'static>> {
    SENTINEL_MODULES
        .iter()
        .map(|name| {
            let health = snapshot.module_health(name);
            let style = theme.health_style(&health);
            let name_span = Span::styled(format!("{name:<13}"), theme.label);
            match health {
                HealthState::Active => Line::from(vec![
                    Span::styled("● ", style),
                    name_span,
                    Span::styled("ACTIVE", style),
                ]),
                HealthState::Error(message) => {
                    let shown = formatting::truncate(&message, ERROR_DISPLAY_LEN);
                    let text = if shown.is_empty() {
                        "ERR".to_string()
                    } else {
                        format!("ERR {shown}")
                    };
                    Line::from(vec![
                        Span::styled("▲ ", style),
                        name_span,
                        Span::styled(text, style),
                    ])
                }
                HealthState::Idle => Line::from(vec![
                    Span::styled("○ ", style),
                    name_span,
                    Span::styled("IDLE", style),
                ]),
            }
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, snapshot: &StateSnapshot, theme: &Theme) {
    super::render_lines(frame, area, " SENTINEL ", lines(snapshot, theme), false, theme);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
