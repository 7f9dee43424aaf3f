//! System telemetry panel: CPU/RAM gauges plus pass-through metrics.

use crate::components::meter;
use crate::themes::Theme;
use argus_core::formatting::{metric_text, parse_metric};
use argus_core::models::{SystemState, UsbState};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

const GAUGE_WIDTH: u16 = 18;

pub fn lines(system: &SystemState, usb: &UsbState, theme: &Theme) -> Vec<Line<'static>> {
    let data = &system.data;
    let cpu = parse_metric(&data.cpu);
    let ram = parse_metric(&data.ram);

    let mut out = vec![gauge_line("CPU ", cpu, theme), gauge_line("RAM ", ram, theme)];

    // RAM absolute figures ride along when the backend sends them.
    if !data.ram_used_gb.is_null() && !data.ram_total_gb.is_null() {
        out.push(Line::from(Span::styled(
            format!(
                "      {} / {} GB",
                metric_text(&data.ram_used_gb),
                metric_text(&data.ram_total_gb)
            ),
            theme.dim,
        )));
    }

    out.push(metric_line("DISK", metric_text(&data.disk_free), theme));
    out.push(metric_line("TEMP", metric_text(&data.temp), theme));
    out.push(metric_line("BATT", metric_text(&data.battery), theme));

    let device_count = usb.devices.len();
    let mut usb_spans = vec![
        Span::styled("USB   ", theme.label),
        Span::styled(format!("{device_count} device(s)"), theme.value),
    ];
    if !usb.last_event.is_empty() {
        usb_spans.push(Span::styled(format!("  {}", usb.last_event), theme.dim));
    }
    out.push(Line::from(usb_spans));

    out
}

fn gauge_line(label: &'static str, percent: f64, theme: &Theme) -> Line<'static> {
    let [filled, empty] = meter::gauge_bar(percent, GAUGE_WIDTH, theme);
    Line::from(vec![
        Span::styled(label, theme.label),
        filled,
        empty,
        Span::styled(format!(" {percent:>3.0}%"), theme.value),
    ])
}

fn metric_line(label: &'static str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}  "), theme.label),
        Span::styled(value, theme.value),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, system: &SystemState, usb: &UsbState, theme: &Theme) {
    super::render_lines(frame, area, " TELEMETRY ", lines(system, usb, theme), false, theme);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::models::StateSnapshot;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_state_defaults() {
        let theme = Theme::dark();
        let snap = StateSnapshot::default();
        let all = lines(&snap.system, &snap.usb, &theme);

        // CPU/RAM default to 0 %, pass-through metrics to the placeholder,
        // USB to zero devices.
        assert!(text_of(&all[0]).contains("  0%"));
        assert!(text_of(&all[1]).contains("  0%"));
        let disk = all.iter().find(|l| text_of(l).starts_with("DISK")).unwrap();
        assert!(text_of(disk).contains("--"));
        let usb = all.iter().find(|l| text_of(l).starts_with("USB")).unwrap();
        assert!(text_of(usb).contains("0 device(s)"));
    }

    #[test]
    fn test_string_metrics_parse_and_band() {
        let theme = Theme::dark();
        let snap =
            StateSnapshot::parse(r#"{"system": {"data": {"cpu": "85", "ram": "40"}}}"#).unwrap();
        let all = lines(&snap.system, &snap.usb, &theme);

        let cpu = &all[0];
        assert!(text_of(cpu).contains(" 85%"));
        // The filled gauge span carries the high-usage band color.
        assert_eq!(cpu.spans[1].style, theme.tier_high);

        let ram = &all[1];
        assert!(text_of(ram).contains(" 40%"));
        assert_eq!(ram.spans[1].style, theme.tier_low);
    }

    #[test]
    fn test_unparseable_cpu_defaults_to_zero() {
        let theme = Theme::dark();
        let snap = StateSnapshot::parse(r#"{"system": {"data": {"cpu": "hot"}}}"#).unwrap();
        let all = lines(&snap.system, &snap.usb, &theme);
        assert!(text_of(&all[0]).contains("  0%"));
    }

    #[test]
    fn test_passthrough_metrics_verbatim() {
        let theme = Theme::dark();
        let snap = StateSnapshot::parse(
            r#"{"system": {"data": {"disk_free": "48.3GB", "temp": "55°C", "battery": "76%⚡"}}}"#,
        )
        .unwrap();
        let all = lines(&snap.system, &snap.usb, &theme);
        let text: String = all.iter().map(|l| text_of(l) + "\n").collect();
        assert!(text.contains("48.3GB"));
        assert!(text.contains("55°C"));
        assert!(text.contains("76%⚡"));
    }

    #[test]
    fn test_ram_absolute_figures_shown_when_present() {
        let theme = Theme::dark();
        let snap = StateSnapshot::parse(
            r#"{"system": {"data": {"ram": 21, "ram_used_gb": 3.2, "ram_total_gb": 15.5}}}"#,
        )
        .unwrap();
        let all = lines(&snap.system, &snap.usb, &theme);
        let text: String = all.iter().map(|l| text_of(l) + "\n").collect();
        assert!(text.contains("3.2 / 15.5 GB"));
    }

    #[test]
    fn test_usb_device_count_and_event() {
        let theme = Theme::dark();
        let snap = StateSnapshot::parse(
            r#"{"usb": {"devices": ["a", "b", "c"], "last_event": "+keyboard"}}"#,
        )
        .unwrap();
        let all = lines(&snap.system, &snap.usb, &theme);
        let usb = all.iter().find(|l| text_of(l).starts_with("USB")).unwrap();
        assert!(text_of(usb).contains("3 device(s)"));
        assert!(text_of(usb).contains("+keyboard"));
    }
}
