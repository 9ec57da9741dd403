//! Application state shared by the router, preloader and page hooks.

use std::cell::{Cell, RefCell};

use shell_cache::FragmentCache;
use shell_core::{SiteConfig, ViewName};

/// Identifies one navigation; only the newest may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationToken(u64);

/// Explicit application state.
///
/// Owns the fragment cache and tracks the active view. Shared by `Rc`
/// between the router and the preloader on a single thread.
#[derive(Debug)]
pub struct AppState {
    config: SiteConfig,
    cache: FragmentCache,
    active: RefCell<Option<ViewName>>,
    generation: Cell<u64>,
}

impl AppState {
    /// Create state for a site configuration.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            cache: FragmentCache::new(),
            active: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    /// The site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The fragment cache.
    pub fn cache(&self) -> &FragmentCache {
        &self.cache
    }

    /// The view currently rendered in the container, if any.
    pub fn active_view(&self) -> Option<ViewName> {
        self.active.borrow().clone()
    }

    /// Start a navigation, superseding any still in flight.
    pub fn begin_navigation(&self) -> NavigationToken {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        NavigationToken(next)
    }

    /// Whether no navigation has started since `token` was issued.
    pub fn is_current(&self, token: NavigationToken) -> bool {
        self.generation.get() == token.0
    }

    pub(crate) fn set_active(&self, view: Option<ViewName>) {
        *self.active.borrow_mut() = view;
    }
}
