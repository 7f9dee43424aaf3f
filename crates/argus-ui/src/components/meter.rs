use crate::themes::Theme;
use argus_core::calculations::{gauge_fill, usage_tier, Tier};
use ratatui::text::Span;

/// Character used to fill the completed portion of a meter.
const FILLED_CHAR: char = '\u{2588}'; // █  FULL BLOCK
/// Character used to fill the empty portion of a meter.
const EMPTY_CHAR: char = '\u{2591}'; // ░  LIGHT SHADE

// ── Fill bar ──────────────────────────────────────────────────────────────────

/// A proportional fill bar: `fraction` of `width` columns filled, styled by
/// the given tier, the remainder in the theme's empty style.
///
/// Returns the two spans (filled, empty) for embedding in a [`Line`].
///
/// [`Line`]: ratatui::text::Line
pub fn fill_bar(fraction: f64, width: u16, tier: Tier, theme: &Theme) -> [Span<'static>; 2] {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * f64::from(width)).round() as u16;
    let empty = width.saturating_sub(filled);

    let filled_str = FILLED_CHAR.to_string().repeat(filled as usize);
    let empty_str = EMPTY_CHAR.to_string().repeat(empty as usize);

    [
        Span::styled(filled_str, theme.tier_style(tier)),
        Span::styled(empty_str, theme.meter_empty),
    ]
}

// ── Gauge bar ─────────────────────────────────────────────────────────────────

/// A usage gauge for a `[0, 100]` percentage.
///
/// The filled share comes from the gauge arc arithmetic
/// ([`gauge_fill`], the complement of the dash offset) and the color from
/// the usage band, so the terminal meter and an angular dial agree exactly.
pub fn gauge_bar(percent: f64, width: u16, theme: &Theme) -> [Span<'static>; 2] {
    fill_bar(gauge_fill(percent), width, usage_tier(percent), theme)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
