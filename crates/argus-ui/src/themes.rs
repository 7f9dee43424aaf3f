use argus_core::calculations::Tier;
use argus_core::models::{ChatSource, HealthState};
use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the console
/// panels and the camera overlay.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Panels ───────────────────────────────────────────────────────────────
    pub panel_border: Style,
    pub panel_title: Style,
    pub placeholder: Style,

    // ── Link indicators ──────────────────────────────────────────────────────
    pub link_online: Style,
    pub link_offline: Style,

    // ── Module health ────────────────────────────────────────────────────────
    pub status_active: Style,
    pub status_error: Style,
    pub status_idle: Style,

    // ── Tier bands (gauges, detection boxes, list bars) ──────────────────────
    pub tier_high: Style,
    pub tier_medium: Style,
    pub tier_low: Style,
    pub meter_empty: Style,

    // ── Camera overlay (raw colors for the pixel grid) ───────────────────────
    pub box_high: Color,
    pub box_medium: Color,
    pub box_low: Color,
    pub scan_line: Color,
    pub chip_text: Color,

    // ── Thoughts ─────────────────────────────────────────────────────────────
    pub thought: Style,
    pub thought_category: Style,
    pub thought_highlight: Style,

    // ── Chat ─────────────────────────────────────────────────────────────────
    pub chat_user: Style,
    pub chat_max: Style,
    pub chat_tool: Style,
    pub chat_thought: Style,
    pub chat_sys: Style,
    pub chat_error: Style,
    pub chat_unknown: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            panel_border: Style::default().fg(Color::DarkGray),
            panel_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),

            link_online: Style::default().fg(Color::Green),
            link_offline: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            status_active: Style::default().fg(Color::Green),
            status_error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            status_idle: Style::default().fg(Color::DarkGray),

            tier_high: Style::default().fg(Color::Red),
            tier_medium: Style::default().fg(Color::Yellow),
            tier_low: Style::default().fg(Color::Green),
            meter_empty: Style::default().fg(Color::DarkGray),

            box_high: Color::Rgb(0, 255, 136),
            box_medium: Color::Rgb(255, 170, 0),
            box_low: Color::Rgb(255, 85, 85),
            scan_line: Color::Rgb(0, 120, 100),
            chip_text: Color::Black,

            thought: Style::default().fg(Color::Magenta),
            thought_category: Style::default().fg(Color::Gray),
            thought_highlight: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            chat_user: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            chat_max: Style::default().fg(Color::White),
            chat_tool: Style::default().fg(Color::Yellow),
            chat_thought: Style::default().fg(Color::Magenta),
            chat_sys: Style::default().fg(Color::DarkGray),
            chat_error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            chat_unknown: Style::default().fg(Color::Gray),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            panel_border: Style::default().fg(Color::Gray),
            panel_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::Gray),

            link_online: Style::default().fg(Color::Green),
            link_offline: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            status_active: Style::default().fg(Color::Green),
            status_error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            status_idle: Style::default().fg(Color::Gray),

            tier_high: Style::default().fg(Color::Red),
            tier_medium: Style::default().fg(Color::Yellow),
            tier_low: Style::default().fg(Color::Green),
            meter_empty: Style::default().fg(Color::Gray),

            box_high: Color::Rgb(0, 170, 90),
            box_medium: Color::Rgb(200, 130, 0),
            box_low: Color::Rgb(200, 60, 60),
            scan_line: Color::Rgb(0, 100, 85),
            chip_text: Color::White,

            thought: Style::default().fg(Color::Magenta),
            thought_category: Style::default().fg(Color::DarkGray),
            thought_highlight: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            chat_user: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            chat_max: Style::default().fg(Color::Black),
            chat_tool: Style::default().fg(Color::Yellow),
            chat_thought: Style::default().fg(Color::Magenta),
            chat_sys: Style::default().fg(Color::Gray),
            chat_error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            chat_unknown: Style::default().fg(Color::DarkGray),
        }
    }

    /// Resolve a theme by CLI name; `"auto"` inspects the terminal.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }

    // ── Lookups ──────────────────────────────────────────────────────────────

    /// Text style for a tier band.
    pub fn tier_style(&self, tier: Tier) -> Style {
        match tier {
            Tier::High => self.tier_high,
            Tier::Medium => self.tier_medium,
            Tier::Low => self.tier_low,
        }
    }

    /// Raw overlay color for a detection box tier.
    pub fn box_color(&self, tier: Tier) -> Color {
        match tier {
            Tier::High => self.box_high,
            Tier::Medium => self.box_medium,
            Tier::Low => self.box_low,
        }
    }

    /// Style for a module health state.
    pub fn health_style(&self, health: &HealthState) -> Style {
        match health {
            HealthState::Active => self.status_active,
            HealthState::Error(_) => self.status_error,
            HealthState::Idle => self.status_idle,
        }
    }

    /// Style for a chat source bucket.
    pub fn chat_style(&self, source: ChatSource) -> Style {
        match source {
            ChatSource::User => self.chat_user,
            ChatSource::Max => self.chat_max,
            ChatSource::Tool => self.chat_tool,
            ChatSource::MaxThought => self.chat_thought,
            ChatSource::Sys => self.chat_sys,
            ChatSource::Error => self.chat_error,
            ChatSource::Unknown => self.chat_unknown,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_explicit() {
        let dark = Theme::from_name("dark");
        let light = Theme::from_name("light");
        assert_eq!(dark.text.fg, Some(Color::White));
        assert_eq!(light.text.fg, Some(Color::Black));
    }

    #[test]
    fn test_tier_styles_are_distinct() {
        let theme = Theme::dark();
        assert_ne!(
            theme.tier_style(Tier::High).fg,
            theme.tier_style(Tier::Low).fg
        );
        assert_ne!(
            theme.tier_style(Tier::High).fg,
            theme.tier_style(Tier::Medium).fg
        );
    }

    #[test]
    fn test_box_colors_are_distinct() {
        let theme = Theme::dark();
        assert_ne!(theme.box_color(Tier::High), theme.box_color(Tier::Medium));
        assert_ne!(theme.box_color(Tier::Medium), theme.box_color(Tier::Low));
    }

    #[test]
    fn test_chat_style_covers_every_source() {
        let theme = Theme::dark();
        for source in [
            ChatSource::User,
            ChatSource::Max,
            ChatSource::Tool,
            ChatSource::MaxThought,
            ChatSource::Sys,
            ChatSource::Error,
            ChatSource::Unknown,
        ] {
            // Every bucket resolves to some foreground color.
            assert!(theme.chat_style(source).fg.is_some(), "{source:?}");
        }
    }

    #[test]
    fn test_health_style_error_is_bold_red() {
        let theme = Theme::dark();
        let style = theme.health_style(&HealthState::Error("x".into()));
        assert_eq!(style.fg, Some(Color::Red));
    }
}
