use clap::Parser;
use std::path::PathBuf;

/// Fixed delay between reconnection attempts, in milliseconds.
pub const DEFAULT_RETRY_MS: u64 = 2000;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Live situational-awareness console for the Argus backend
#[derive(Parser, Debug, Clone)]
#[command(
    name = "argus-console",
    about = "Live situational-awareness console for the Argus backend",
    version
)]
pub struct Settings {
    /// Backend host
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Backend port
    #[arg(long, default_value = "7777")]
    pub port: u16,

    /// State stream path
    #[arg(long, default_value = "/ws/state")]
    pub state_path: String,

    /// Camera stream path
    #[arg(long, default_value = "/ws/camera")]
    pub camera_path: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "auto"])]
    pub theme: String,

    /// Reconnect delay in milliseconds
    #[arg(long, default_value_t = DEFAULT_RETRY_MS)]
    pub retry_ms: u64,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path (defaults to ~/.argus-console/logs/console.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from the process arguments.
    pub fn load() -> Self {
        Settings::parse()
    }

    /// Websocket URL for the state stream.
    ///
    /// Always the insecure scheme; TLS, if any, is a concern of whatever
    /// fronts the backend.
    pub fn state_url(&self) -> String {
        format!("ws://{}:{}{}", self.host, self.port, self.state_path)
    }

    /// Websocket URL for the camera stream.
    pub fn camera_url(&self) -> String {
        format!("ws://{}:{}{}", self.host, self.port, self.camera_path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
