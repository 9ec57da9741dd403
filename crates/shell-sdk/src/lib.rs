//! Public SDK for the Understanding Us site shell.
//!
//! This crate re-exports all shell functionality:
//!
//! ```ignore
//! use shell_sdk::prelude::*;
//!
//! let state = Rc::new(AppState::new(SiteConfig::default()));
//! let client = Rc::new(FetchClient::new(MemoryTransport::new()));
//! let logger = StructuredLogger::new("my-site");
//!
//! let router = Router::new(state, document, client, NoHooks, logger);
//! router.navigate("#home").await;
//! ```

pub use shell_cache;
pub use shell_core;
pub use shell_data;
pub use shell_observability;
pub use shell_router;

/// Prelude for convenient imports.
pub mod prelude {
    pub use shell_cache::*;
    pub use shell_core::*;
    pub use shell_data::*;
    pub use shell_observability::*;
    pub use shell_router::*;
}
