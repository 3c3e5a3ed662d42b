//! ralmatch - RAL color lookup and nearest-match server
//!
//! Loads a RAL reference table once at startup and answers RAL/hex/name
//! conversions over HTTP and from the command line.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
