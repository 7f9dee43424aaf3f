use crate::themes::Theme;
use argus_core::formatting;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

// ── Header strip ──────────────────────────────────────────────────────────────

/// Render the one-row header: title on the left, link indicators and the
/// live clock on the right.
pub fn render(frame: &mut Frame, area: Rect, state_live: bool, camera_live: bool, theme: &Theme) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(24), Constraint::Length(34)]).areas(area);

    let title = Line::from(vec![
        Span::styled("⚔ ARGUS ", theme.header),
        Span::styled("— COMMAND CENTER", theme.dim),
    ]);
    frame.render_widget(Paragraph::new(title), left);

    let mut spans = status_spans(state_live, camera_live, theme);
    spans.push(Span::styled(" │ ", theme.separator));
    spans.push(Span::styled(formatting::clock_now(), theme.value));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).right_aligned(),
        right,
    );
}

/// Liveness indicators for the two streams.
///
/// Each stream carries its own indicator: the camera link can be up while
/// the state link is down, and vice versa.
pub fn status_spans(state_live: bool, camera_live: bool, theme: &Theme) -> Vec<Span<'static>> {
    let link = |name: &'static str, live: bool| {
        if live {
            Span::styled(format!("◉ {name}"), theme.link_online)
        } else {
            Span::styled(format!("◌ {name}"), theme.link_offline)
        }
    };
    vec![
        link("STATE", state_live),
        Span::raw(" "),
        link("CAM", camera_live),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
