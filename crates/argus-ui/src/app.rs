//! Main application state and TUI event loop.
//!
//! [`App`] owns all view state: the two link flags, the last snapshot, the
//! last decoded raster, and the chat transcript cache. Every event from the
//! runtime channel mutates this state; every draw renders whatever is
//! current. There is no other state holder, so no locking anywhere.

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use image::RgbImage;
use ratatui::layout::{Constraint, Layout};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;

use argus_core::models::StateSnapshot;
use argus_runtime::ConsoleEvent;

use crate::camera_view::CameraView;
use crate::components::header;
use crate::panels::chat::ChatTranscript;
use crate::panels::{detections, sentinel, telemetry, thoughts, vision};
use crate::themes::Theme;

/// Sliding window for the decode-rate readout.
const FPS_WINDOW: Duration = Duration::from_secs(1);

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the console TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// State stream link flag, driven only by lifecycle events.
    pub state_live: bool,
    /// Camera stream link flag, driven only by lifecycle events.
    pub camera_live: bool,
    /// Last full snapshot; panels render its defaults until one arrives.
    pub snapshot: StateSnapshot,
    /// Last decoded camera raster.
    pub frame: Option<RgbImage>,
    /// Completion instants of recent decodes, pruned to [`FPS_WINDOW`].
    decode_times: VecDeque<Instant>,
    /// Chat transcript cache with its render gate.
    chat: ChatTranscript,
}

impl App {
    /// Construct a new application with the given theme name.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            should_quit: false,
            state_live: false,
            camera_live: false,
            snapshot: StateSnapshot::default(),
            frame: None,
            decode_times: VecDeque::new(),
            chat: ChatTranscript::new(),
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the console TUI, receiving runtime events from `rx`.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the terminal event loop stays on the current thread while stream
    /// updates arrive on the async channel via `try_recv`.
    ///
    /// The loop exits on `q`, `Q`, or `Ctrl+C`.
    pub async fn run(mut self, mut rx: mpsc::Receiver<ConsoleEvent>) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard events with a short timeout so we don't block.
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                        _ => {}
                    }
                }
            }

            // Drain any pending stream events (non-blocking).
            loop {
                match rx.try_recv() {
                    Ok(event) => self.apply_event(event),
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── State updates ─────────────────────────────────────────────────────────

    /// Apply one runtime event to the view state.
    pub fn apply_event(&mut self, event: ConsoleEvent) {
        match event {
            ConsoleEvent::StateLink(live) => self.state_live = live,
            ConsoleEvent::CameraLink(live) => self.camera_live = live,
            // A snapshot replaces every derived view wholesale.
            ConsoleEvent::Snapshot(snapshot) => self.snapshot = *snapshot,
            ConsoleEvent::Frame(raster) => {
                self.frame = Some(raster);
                self.decode_times.push_back(Instant::now());
            }
        }
    }

    /// Decodes completed within the last second.
    pub fn fps(&mut self) -> usize {
        // The monotonic clock may be younger than the window right after
        // boot; nothing can be stale yet in that case.
        let Some(cutoff) = Instant::now().checked_sub(FPS_WINDOW) else {
            return self.decode_times.len();
        };
        while self.decode_times.front().is_some_and(|t| *t < cutoff) {
            self.decode_times.pop_front();
        }
        self.decode_times.len()
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current state into `frame`.
    fn render(&mut self, frame: &mut Frame) {
        let fps = self.fps();
        self.chat.update(&self.snapshot.chat, &self.theme);

        let [header_area, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        header::render(frame, header_area, self.state_live, self.camera_live, &self.theme);

        let [left, center, right] = Layout::horizontal([
            Constraint::Length(30),
            Constraint::Min(40),
            Constraint::Length(36),
        ])
        .areas(body);

        // Left column: module health, telemetry, detection list.
        let [sentinel_area, telemetry_area, detections_area] = Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Min(5),
        ])
        .areas(left);
        sentinel::render(frame, sentinel_area, &self.snapshot, &self.theme);
        telemetry::render(
            frame,
            telemetry_area,
            &self.snapshot.system,
            &self.snapshot.usb,
            &self.theme,
        );
        detections::render(frame, detections_area, &self.snapshot.yolo, &self.theme);

        // Center: the camera pane.
        frame.render_widget(
            CameraView {
                frame: self.frame.as_ref(),
                detections: &self.snapshot.yolo.detections,
                live: self.camera_live,
                fps,
                epoch_ms: epoch_ms(),
                theme: &self.theme,
            },
            center,
        );

        // Right column: thoughts log, scene description, dialogue.
        let [thoughts_area, vision_area, chat_area] = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Min(8),
        ])
        .areas(right);
        thoughts::render(frame, thoughts_area, &self.snapshot.thoughts, &self.theme);
        vision::render(frame, vision_area, &self.snapshot.vision_model, &self.theme);
        self.chat.render(frame, chat_area, &self.theme);
    }
}

/// Wall-clock milliseconds since the Unix epoch, for the scan-line phase.
fn epoch_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation_defaults() {
        let app = App::new("dark");
        assert!(!app.should_quit);
        assert!(!app.state_live);
        assert!(!app.camera_live);
        assert!(app.frame.is_none());
        assert!(app.snapshot.chat.is_empty());
    }

    #[test]
    fn test_link_events_drive_flags_independently() {
        let mut app = App::new("dark");
        app.apply_event(ConsoleEvent::StateLink(true));
        assert!(app.state_live);
        assert!(!app.camera_live);

        app.apply_event(ConsoleEvent::CameraLink(true));
        app.apply_event(ConsoleEvent::StateLink(false));
        assert!(!app.state_live);
        assert!(app.camera_live);
    }

    #[test]
    fn test_snapshot_replaces_previous_wholesale() {
        let mut app = App::new("dark");

        let first = StateSnapshot::parse(
            r#"{"vision_model": {"description": "a hallway"}, "timestamp": "t1"}"#,
        )
        .unwrap();
        app.apply_event(ConsoleEvent::Snapshot(Box::new(first)));
        assert_eq!(app.snapshot.vision_model.description, "a hallway");

        // A later snapshot without the field resets it to its default;
        // nothing is merged field by field.
        let second = StateSnapshot::parse(r#"{"timestamp": "t2"}"#).unwrap();
        app.apply_event(ConsoleEvent::Snapshot(Box::new(second)));
        assert!(app.snapshot.vision_model.description.is_empty());
        assert_eq!(app.snapshot.timestamp, "t2");
    }

    #[test]
    fn test_frame_event_updates_raster_and_rate() {
        let mut app = App::new("dark");
        assert_eq!(app.fps(), 0);

        let raster = RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]));
        app.apply_event(ConsoleEvent::Frame(raster.clone()));
        app.apply_event(ConsoleEvent::Frame(raster));

        assert!(app.frame.is_some());
        assert_eq!(app.fps(), 2);
    }

    #[test]
    fn test_fps_prunes_old_decodes() {
        let mut app = App::new("dark");
        // Entries older than the window disappear on the next read.
        let now = Instant::now();
        if let Some(old) = now.checked_sub(Duration::from_secs(5)) {
            app.decode_times.push_back(old);
        }
        app.decode_times.push_back(now);
        assert_eq!(app.fps(), 1);
    }

    #[test]
    fn test_fps_empty_window_is_zero() {
        // Must not panic regardless of how young the monotonic clock is.
        let mut app = App::new("dark");
        assert_eq!(app.fps(), 0);
        app.decode_times.push_back(Instant::now());
        assert_eq!(app.fps(), 1);
    }

    #[test]
    fn test_frame_survives_camera_link_drop() {
        // A disconnect flips the flag but keeps the last raster; the pane
        // shows the offline placeholder from the flag alone.
        let mut app = App::new("dark");
        app.apply_event(ConsoleEvent::CameraLink(true));
        app.apply_event(ConsoleEvent::Frame(RgbImage::from_pixel(
            2,
            2,
            image::Rgb([0, 0, 0]),
        )));
        app.apply_event(ConsoleEvent::CameraLink(false));
        assert!(!app.camera_live);
        assert!(app.frame.is_some());
    }
}
