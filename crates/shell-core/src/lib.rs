//! Core abstractions for the Understanding Us site shell.
//!
//! This crate provides the fundamental types and traits:
//! - `ViewName` - Validated view token resolved from the URL fragment
//! - `SiteConfig` - Shell configuration (container, known views, preload)
//! - `Document` trait - The DOM seam every widget and the router write through
//! - `MemoryDocument` - In-memory document for development/testing

mod config;
mod dom;
mod view;

pub use config::*;
pub use dom::*;
pub use view::*;
