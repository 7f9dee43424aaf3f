mod bootstrap;

use anyhow::Result;
use argus_core::settings::Settings;
use argus_runtime::StreamOrchestrator;
use argus_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Argus console v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "State: {}, Camera: {}, Theme: {}",
        settings.state_url(),
        settings.camera_url(),
        settings.theme
    );

    let orchestrator =
        StreamOrchestrator::new(settings.state_url(), settings.camera_url(), settings.retry_ms);
    let (rx, handle) = orchestrator.start();

    let app = App::new(&settings.theme);

    // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the TUI.
    // We also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run(rx) => {
            handle.abort();
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down stream tasks");
            handle.abort();
        }
    }

    Ok(())
}
