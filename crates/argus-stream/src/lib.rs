//! Transport layer for the Argus console.
//!
//! One [`connection::ConnectionManager`] per stream keeps a single live
//! websocket open with an unconditional fixed-delay retry policy, and the
//! [`decoder`] turns camera envelopes into drawable rasters.

pub mod connection;
pub mod decoder;
