//! Static asset fetching for the Understanding Us site shell.
//!
//! This crate provides:
//! - `FetchClient` - Text and JSON fetches with uniform error reporting
//! - `Transport` trait - The HTTP seam (browser `fetch` or in-memory)
//! - `ResourceKind` - What a fetch is for, used to tag logs
//! - `MemoryTransport` - Scripted responses and a request log for tests

#[cfg(target_arch = "wasm32")]
mod browser;
mod client;
mod resource;
mod transport;

#[cfg(target_arch = "wasm32")]
pub use browser::*;
pub use client::*;
pub use resource::*;
pub use transport::*;
