use thiserror::Error;

/// All errors produced by the Argus console.
///
/// None of these are fatal after startup: transport and payload errors are
/// logged and recovered, so this type mostly travels through `tracing`
/// rather than up the stack.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The websocket transport failed (connect, read, or close).
    #[error("Transport error on {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// An inbound camera payload could not be decoded to a raster.
    #[error("Frame decode error: {0}")]
    FrameDecode(String),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for raw I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the argus crates.
pub type Result<T> = std::result::Result<T, ConsoleError>;
