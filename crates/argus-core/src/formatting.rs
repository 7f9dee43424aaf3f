//! Display formatting helpers shared by the panels.

use chrono::{DateTime, Local, NaiveDateTime};
use serde_json::Value;

/// Placeholder shown for telemetry values the backend did not send.
pub const METRIC_PLACEHOLDER: &str = "--";

/// Maximum characters of an error message shown in the sentinel panel.
pub const ERROR_DISPLAY_LEN: usize = 30;

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Parse a CPU/RAM metric that may arrive as a JSON number or a numeric
/// string. Anything unparseable (including absence) is `0.0`.
pub fn parse_metric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Render an opaque pass-through metric (disk, temp, battery).
///
/// Strings pass through untouched; numbers are printed as-is; anything else
/// becomes the placeholder.
pub fn metric_text(value: &Value) -> String {
    match value {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => METRIC_PLACEHOLDER.to_string(),
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

/// Truncate an error string to at most `max` characters.
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Format a confidence in `[0, 1]` as a whole percentage, e.g. `"87%"`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

// ── Time ──────────────────────────────────────────────────────────────────────

/// Current wall-clock time as `HH:MM:SS`.
pub fn clock_now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Format an ISO-8601 timestamp as a local time-of-day string.
///
/// An empty input renders as an empty string; an unparseable one passes
/// through verbatim rather than erroring.
pub fn format_time_of_day(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    // The backend also emits naive local timestamps without an offset.
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%H:%M:%S").to_string();
    }
    timestamp.to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
