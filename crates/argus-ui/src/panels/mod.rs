//! The six state-driven panels.
//!
//! Each panel is a pure function of the last snapshot: it renders whatever
//! is there and defaults gracefully for whatever is not. Only the chat
//! transcript keeps state, and only for its length-equality render gate.

pub mod chat;
pub mod detections;
pub mod sentinel;
pub mod telemetry;
pub mod thoughts;
pub mod vision;

use crate::themes::Theme;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Render a titled, bordered panel of lines, optionally pinned to its tail
/// (the log-style panels auto-scroll to the end on every render).
pub(crate) fn render_lines(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    pin_to_tail: bool,
    theme: &Theme,
) {
    let block = Block::bordered()
        .border_style(theme.panel_border)
        .title(ratatui::text::Span::styled(title.to_string(), theme.panel_title));
    let inner_height = area.height.saturating_sub(2);

    let scroll = if pin_to_tail {
        (lines.len() as u16).saturating_sub(inner_height)
    } else {
        0
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}
