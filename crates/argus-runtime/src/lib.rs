//! Background runtime for the Argus console.
//!
//! [`orchestrator::StreamOrchestrator`] owns both stream connection
//! managers and fans their output into one `mpsc` channel of
//! [`orchestrator::ConsoleEvent`]s so the TUI event loop can consume them
//! without any shared mutable state.

pub mod orchestrator;

pub use orchestrator::{ConsoleEvent, ConsoleHandle, StreamOrchestrator};
