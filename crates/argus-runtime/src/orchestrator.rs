//! Async stream orchestrator.
//!
//! Spawns the two [`ConnectionManager`]s, parses their payloads, and sends
//! [`ConsoleEvent`]s through a single `mpsc` channel. The UI loop on the
//! other end is the sole owner of all view state, so nothing here needs a
//! lock. In-stream ordering is preserved by the channel; across the two
//! streams there is no ordering guarantee at all.

use std::time::Duration;

use argus_core::models::StateSnapshot;
use argus_stream::connection::{ConnectionManager, StreamEvent};
use argus_stream::decoder;
use image::RgbImage;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// ── Public types ──────────────────────────────────────────────────────────────

/// One event delivered to the presentation layer.
///
/// This is the primary data contract between the background runtime and
/// the TUI.
#[derive(Debug)]
pub enum ConsoleEvent {
    /// State stream liveness changed.
    StateLink(bool),
    /// Camera stream liveness changed; also drives the camera pane
    /// placeholder, independent of whether frames are arriving.
    CameraLink(bool),
    /// A parsed state snapshot; fully replaces all derived views.
    Snapshot(Box<StateSnapshot>),
    /// A decoded camera raster; the newest one always wins.
    Frame(RgbImage),
}

// ── StreamOrchestrator ────────────────────────────────────────────────────────

/// Coordinator for the two stream connections.
///
/// Call [`StreamOrchestrator::start`] to spin everything up and receive
/// the channel endpoint for [`ConsoleEvent`] updates.
pub struct StreamOrchestrator {
    state_url: String,
    camera_url: String,
    retry_delay: Duration,
}

impl StreamOrchestrator {
    /// Create a new orchestrator.
    ///
    /// # Parameters
    /// - `state_url`  – websocket URL of the state stream.
    /// - `camera_url` – websocket URL of the camera stream.
    /// - `retry_ms`   – fixed reconnect delay shared by both managers.
    pub fn new(state_url: String, camera_url: String, retry_ms: u64) -> Self {
        Self {
            state_url,
            camera_url,
            retry_delay: Duration::from_millis(retry_ms),
        }
    }

    /// Start both connection managers and the payload pumps.
    pub fn start(self) -> (mpsc::Receiver<ConsoleEvent>, ConsoleHandle) {
        // Buffer enough events that a slow redraw never stalls the readers.
        let (tx, rx) = mpsc::channel(64);

        let (state_tx, state_rx) = mpsc::channel(32);
        let state_conn = ConnectionManager::new("state", self.state_url, self.retry_delay)
            .spawn(state_tx);
        let state_pump = tokio::spawn(pump_state(state_rx, tx.clone()));

        let (camera_tx, camera_rx) = mpsc::channel(32);
        let camera_conn = ConnectionManager::new("camera", self.camera_url, self.retry_delay)
            .spawn(camera_tx);
        let camera_pump = tokio::spawn(pump_camera(camera_rx, tx));

        let handle = ConsoleHandle {
            tasks: vec![state_conn, state_pump, camera_conn, camera_pump],
        };
        (rx, handle)
    }
}

// ── ConsoleHandle ─────────────────────────────────────────────────────────────

/// A handle to the background stream tasks.
///
/// Call [`ConsoleHandle::abort`] to stop everything on shutdown.
pub struct ConsoleHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl ConsoleHandle {
    /// Immediately abort all stream tasks.
    pub fn abort(&self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

// ── Payload pumps ─────────────────────────────────────────────────────────────

/// Forward state stream events, parsing snapshots.
async fn pump_state(mut rx: mpsc::Receiver<StreamEvent>, tx: mpsc::Sender<ConsoleEvent>) {
    while let Some(event) = rx.recv().await {
        if let Some(out) = translate_state(event) {
            if tx.send(out).await.is_err() {
                return;
            }
        }
    }
}

/// Translate one state stream event.
///
/// Malformed payloads are logged and dropped; they never tear anything
/// down, and every other panel keeps updating from the next good snapshot.
fn translate_state(event: StreamEvent) -> Option<ConsoleEvent> {
    match event {
        StreamEvent::Connected => Some(ConsoleEvent::StateLink(true)),
        StreamEvent::Disconnected => Some(ConsoleEvent::StateLink(false)),
        StreamEvent::Message(raw) => match StateSnapshot::parse(&raw) {
            Ok(snapshot) => Some(ConsoleEvent::Snapshot(Box::new(snapshot))),
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed state payload");
                None
            }
        },
    }
}

/// Forward camera stream events, decoding frames off the event loop.
///
/// Each decode runs in its own blocking task and sends its raster when it
/// finishes. Completions are therefore not guaranteed to match arrival
/// order: the last decode to *finish* wins, not necessarily the last frame
/// received. The backend sends no ordering token, so this race is accepted
/// rather than papered over.
async fn pump_camera(mut rx: mpsc::Receiver<StreamEvent>, tx: mpsc::Sender<ConsoleEvent>) {
    while let Some(event) = rx.recv().await {
        match event {
            StreamEvent::Connected => {
                if tx.send(ConsoleEvent::CameraLink(true)).await.is_err() {
                    return;
                }
            }
            StreamEvent::Disconnected => {
                if tx.send(ConsoleEvent::CameraLink(false)).await.is_err() {
                    return;
                }
            }
            StreamEvent::Message(raw) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    match tokio::task::spawn_blocking(move || decoder::decode_frame(&raw)).await {
                        Ok(Ok(Some(raster))) => {
                            let _ = tx.send(ConsoleEvent::Frame(raster)).await;
                        }
                        // Envelope without a frame key: a valid no-op.
                        Ok(Ok(None)) => {
                            tracing::debug!("camera envelope without frame");
                        }
                        Ok(Err(e)) => {
                            tracing::debug!(error = %e, "dropping undecodable frame");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "frame decode task failed");
                        }
                    }
                });
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
