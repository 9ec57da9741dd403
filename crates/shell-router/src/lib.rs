//! Fragment-identifier view routing for the Understanding Us site shell.
//!
//! ```text
//! #home      -> views/home.html
//! #donate    -> views/donate.html   + donation widget
//! #media     -> views/media.html    + press list
//! (empty)    -> views/home.html
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let state = Rc::new(AppState::new(SiteConfig::default()));
//! let router = Router::new(state.clone(), document, client.clone(), hooks, logger);
//!
//! router.navigate("#donate").await;
//!
//! Preloader::new(state, client).run_after(&delay).await;
//! ```

mod preload;
mod router;
mod state;

pub use preload::*;
pub use router::*;
pub use state::*;
