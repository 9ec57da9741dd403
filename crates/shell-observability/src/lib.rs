//! Structured logging for the Understanding Us site shell.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with site and view context
//! - `LogSink` - Where entries go (stderr, the browser console, or an in-memory buffer)
//! - `LogBuffer` - Captured entries for assertions in tests

mod logging;

pub use logging::*;
