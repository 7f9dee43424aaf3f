//! Core domain types and pure logic for the Argus console.
//!
//! Everything in this crate is I/O-free: wire models, tier/gauge
//! calculations, letterbox geometry, formatting helpers, the shared error
//! type, and CLI settings.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod geometry;
pub mod models;
pub mod settings;
