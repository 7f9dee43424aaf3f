use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.argus-console/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.argus-console/`
/// - `~/.argus-console/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let console_dir = home.join(".argus-console");
    std::fs::create_dir_all(&console_dir)?;
    std::fs::create_dir_all(console_dir.join("logs"))?;
    Ok(())
}

/// Default log file location under the console directory.
pub fn default_log_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".argus-console").join("logs").join("console.log")
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map CLI log-level names to tracing filter directives.
fn normalise_level(log_level: &str) -> &str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// The TUI owns the terminal for its whole lifetime, so log output goes to
/// a file: `log_file` if given, otherwise [`default_log_path`].
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let path = log_file.cloned().unwrap_or_else(default_log_path);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(false)
        .with_writer(Arc::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
