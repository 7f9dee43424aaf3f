//! Websocket connection manager.
//!
//! Owns exactly one live socket to a named endpoint. On any close — remote
//! hangup, transport error, or failed connect — it emits `Disconnected` and
//! retries after a fixed delay, forever. No backoff growth, no cap, no
//! circuit breaker. The manager is receive-only: nothing is ever written
//! back to the socket.

use std::time::Duration;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

// ── StreamEvent ───────────────────────────────────────────────────────────────

/// Lifecycle and payload events emitted by a [`ConnectionManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// The socket opened; the liveness indicator should flip to online.
    Connected,
    /// One inbound text payload, raw and unparsed.
    Message(String),
    /// The socket closed (or a connect attempt failed); a retry is already
    /// scheduled.
    Disconnected,
}

// ── ConnectionManager ─────────────────────────────────────────────────────────

/// Reconnecting websocket reader for one endpoint.
///
/// Two managers run side by side with no shared state and no ordering
/// guarantee between them; each is the sole owner of its socket.
pub struct ConnectionManager {
    /// Short name used in log lines (`"state"` / `"camera"`).
    label: &'static str,
    url: String,
    retry_delay: Duration,
}

impl ConnectionManager {
    pub fn new(label: &'static str, url: String, retry_delay: Duration) -> Self {
        Self {
            label,
            url,
            retry_delay,
        }
    }

    /// Spawn the connection loop as a tokio task.
    ///
    /// The loop exits only when the receiving side of `tx` is dropped.
    pub fn spawn(self, tx: mpsc::Sender<StreamEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(tx))
    }

    async fn run(self, tx: mpsc::Sender<StreamEvent>) {
        loop {
            match connect_async(&self.url).await {
                Ok((socket, _response)) => {
                    tracing::info!(stream = self.label, url = %self.url, "stream connected");
                    if tx.send(StreamEvent::Connected).await.is_err() {
                        return;
                    }

                    // Read half only; this client never sends.
                    let (_write, mut read) = socket.split();
                    while let Some(item) = read.next().await {
                        match item {
                            Ok(Message::Text(text)) => {
                                if tx.send(StreamEvent::Message(text)).await.is_err() {
                                    return;
                                }
                            }
                            Ok(Message::Close(_)) => {
                                tracing::info!(stream = self.label, "server closed stream");
                                break;
                            }
                            // Pings are answered by the library; binary and
                            // pong frames carry nothing for us.
                            Ok(_) => {}
                            Err(e) => {
                                // A transport error is forced into a close.
                                tracing::warn!(stream = self.label, error = %e, "stream error");
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(stream = self.label, url = %self.url, error = %e, "connect failed");
                }
            }

            if tx.send(StreamEvent::Disconnected).await.is_err() {
                return;
            }

            tokio::time::sleep(self.retry_delay).await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
