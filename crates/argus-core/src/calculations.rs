//! Tier banding and gauge arithmetic.
//!
//! All thresholds here are discrete: a value lands in exactly one tier,
//! never on a gradient.

// ── Tiers ─────────────────────────────────────────────────────────────────────

/// Discrete color classification shared by gauges, detection boxes, and the
/// detections list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

/// Band a CPU/RAM usage percentage: `> 80` high, `> 50` medium, else low.
pub fn usage_tier(percent: f64) -> Tier {
    if percent > 80.0 {
        Tier::High
    } else if percent > 50.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Band a detection confidence in `[0, 1]`: `> 0.7`, `> 0.5`, else.
pub fn confidence_tier(confidence: f64) -> Tier {
    if confidence > 0.7 {
        Tier::High
    } else if confidence > 0.5 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

// ── Gauge ─────────────────────────────────────────────────────────────────────

/// Arc length constant for the telemetry gauges.
pub const GAUGE_ARC: f64 = 220.0;

/// Dash offset for a gauge showing `percent` of `[0, 100]`.
///
/// Linear mapping: `GAUGE_ARC − (percent/100)·GAUGE_ARC`. Out-of-range
/// input is clamped so the needle never leaves the dial.
pub fn gauge_offset(percent: f64) -> f64 {
    let p = percent.clamp(0.0, 100.0);
    GAUGE_ARC - (p / 100.0) * GAUGE_ARC
}

/// Fraction of the gauge arc that is filled, in `[0, 1]`.
pub fn gauge_fill(percent: f64) -> f64 {
    1.0 - gauge_offset(percent) / GAUGE_ARC
}

// ── Tests ─────────────────────────────────────────────────────────────────────
