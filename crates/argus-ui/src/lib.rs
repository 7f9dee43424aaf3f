//! Terminal UI layer for the Argus console.
//!
//! Provides themes, the header and meter components, the six state-driven
//! panels, the half-block camera view, and the main application event loop
//! built on top of [`ratatui`].

pub mod app;
pub mod camera_view;
pub mod components;
pub mod panels;
pub mod themes;
