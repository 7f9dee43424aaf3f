//! Chat transcript panel.
//!
//! The only panel with a render gate: lines are rebuilt just when the
//! message count changes. A replaced-but-same-length list is therefore
//! missed — that is the documented contract of the gate (a cheap
//! idempotence check, not a true diff), not a bug to fix here.

use crate::themes::Theme;
use argus_core::formatting::format_time_of_day;
use argus_core::models::ChatMessage;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

/// Rolling window of messages kept on screen.
pub const TRANSCRIPT_WINDOW: usize = 30;

// ── ChatTranscript ────────────────────────────────────────────────────────────

/// Cached transcript lines plus the length-equality render gate.
#[derive(Debug, Default)]
pub struct ChatTranscript {
    last_count: Option<usize>,
    lines: Vec<Line<'static>>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the cached lines if the message count changed.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn update(&mut self, messages: &[ChatMessage], theme: &Theme) -> bool {
        if self.last_count == Some(messages.len()) {
            return false;
        }
        self.last_count = Some(messages.len());
        self.lines = build_lines(messages, theme);
        true
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Render, pinned to the tail.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = if self.lines.is_empty() {
            vec![Line::from(Span::styled("NO DIALOGUE YET", theme.placeholder))]
        } else {
            self.lines.clone()
        };
        super::render_lines(frame, area, " DIALOGUE ", lines, true, theme);
    }
}

/// Most recent [`TRANSCRIPT_WINDOW`] messages, one line each.
fn build_lines(messages: &[ChatMessage], theme: &Theme) -> Vec<Line<'static>> {
    let start = messages.len().saturating_sub(TRANSCRIPT_WINDOW);
    messages[start..]
        .iter()
        .map(|m| {
            let source = m.source_kind();
            let style = theme.chat_style(source);
            let mut spans = Vec::new();
            let time = format_time_of_day(&m.timestamp);
            if !time.is_empty() {
                spans.push(Span::styled(format!("[{time}] "), theme.dim));
            }
            spans.push(Span::styled(
                format!("{} {:<7} ", source.icon(), source.label()),
                style,
            ));
            spans.push(Span::styled(m.message.clone(), theme.text));
            Line::from(spans)
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn msg(source: &str, text: &str) -> ChatMessage {
        ChatMessage {
            source: source.to_string(),
            message: text.to_string(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn test_first_update_renders() {
        let theme = Theme::dark();
        let mut transcript = ChatTranscript::new();
        assert!(transcript.update(&[msg("USER", "hello")], &theme));
        assert_eq!(transcript.lines().len(), 1);
    }

    #[test]
    fn test_unchanged_length_is_noop() {
        let theme = Theme::dark();
        let mut transcript = ChatTranscript::new();
        assert!(transcript.update(&[msg("USER", "hello")], &theme));
        assert!(!transcript.update(&[msg("USER", "hello")], &theme));
    }

    #[test]
    fn test_same_length_replacement_is_missed() {
        // The documented limitation of the length gate: replacing the list
        // with a different one of equal length renders nothing new.
        let theme = Theme::dark();
        let mut transcript = ChatTranscript::new();
        transcript.update(&[msg("USER", "hello")], &theme);
        assert!(!transcript.update(&[msg("MAX", "entirely different")], &theme));
        assert!(text_of(&transcript.lines()[0]).contains("hello"));
    }

    #[test]
    fn test_length_change_rerenders() {
        let theme = Theme::dark();
        let mut transcript = ChatTranscript::new();
        transcript.update(&[msg("USER", "hello")], &theme);
        assert!(transcript.update(&[msg("USER", "hello"), msg("MAX", "hi")], &theme));
        assert_eq!(transcript.lines().len(), 2);
        // Shrinking is a change too.
        assert!(transcript.update(&[], &theme));
        assert!(transcript.lines().is_empty());
    }

    #[test]
    fn test_window_keeps_most_recent_thirty() {
        let theme = Theme::dark();
        let mut transcript = ChatTranscript::new();
        let messages: Vec<ChatMessage> =
            (0..45).map(|i| msg("MAX", &format!("m{i}"))).collect();
        transcript.update(&messages, &theme);
        assert_eq!(transcript.lines().len(), TRANSCRIPT_WINDOW);
        assert!(text_of(&transcript.lines()[0]).contains("m15"));
        assert!(text_of(&transcript.lines()[29]).contains("m44"));
    }

    #[test]
    fn test_source_mapping_and_fallback() {
        let theme = Theme::dark();
        let mut transcript = ChatTranscript::new();
        transcript.update(
            &[msg("USER", "a"), msg("TOOL", "b"), msg("ORACLE", "c")],
            &theme,
        );
        let texts: Vec<String> = transcript.lines().iter().map(text_of).collect();
        assert!(texts[0].contains("YOU"));
        assert!(texts[1].contains("TOOL"));
        assert!(texts[2].contains("???"), "unknown source bucket: {}", texts[2]);
    }

    #[test]
    fn test_timestamp_prefix() {
        let theme = Theme::dark();
        let mut transcript = ChatTranscript::new();
        let mut m = msg("SYS", "boot");
        m.timestamp = "2026-08-28T07:00:01".to_string();
        transcript.update(&[m], &theme);
        assert!(text_of(&transcript.lines()[0]).starts_with("[07:00:01] "));
    }
}
