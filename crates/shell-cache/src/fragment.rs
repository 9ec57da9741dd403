//! Fragment caching for the lifetime of a page session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use serde::{Deserialize, Serialize};
use shell_core::ViewName;

/// Status of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Markup was already cached.
    Hit,
    /// Markup had to be fetched.
    Miss,
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Miss => write!(f, "MISS"),
        }
    }
}

/// What populated a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentOrigin {
    /// Fetched because the user navigated to the view.
    Navigation,
    /// Fetched by the background preload pass.
    Preload,
}

/// A cached fragment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFragment {
    /// The cached markup.
    pub content: String,
    /// Who fetched it.
    pub origin: FragmentOrigin,
}

impl CachedFragment {
    /// Create a new cached fragment.
    pub fn new(content: impl Into<String>, origin: FragmentOrigin) -> Self {
        Self {
            content: content.into(),
            origin,
        }
    }
}

/// In-memory map from view name to markup.
///
/// Entries are never invalidated: once a view is cached its markup is fixed
/// for the session, and later inserts for the same view are ignored.
#[derive(Debug, Default)]
pub struct FragmentCache {
    entries: RefCell<HashMap<ViewName, CachedFragment>>,
}

impl FragmentCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached markup for a view.
    pub fn get(&self, view: &ViewName) -> Option<String> {
        self.entries
            .borrow()
            .get(view)
            .map(|fragment| fragment.content.clone())
    }

    /// Get the full cached entry for a view.
    pub fn entry(&self, view: &ViewName) -> Option<CachedFragment> {
        self.entries.borrow().get(view).cloned()
    }

    /// Whether a view is cached.
    pub fn contains(&self, view: &ViewName) -> bool {
        self.entries.borrow().contains_key(view)
    }

    /// Store markup unless the view is already cached.
    ///
    /// Returns `true` if this call populated the entry.
    pub fn insert(
        &self,
        view: ViewName,
        content: impl Into<String>,
        origin: FragmentOrigin,
    ) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.contains_key(&view) {
            return false;
        }
        entries.insert(view, CachedFragment::new(content, origin));
        true
    }

    /// Get cached markup or fetch and store it.
    ///
    /// No borrow is held while `fetch` runs, so other tasks may populate the
    /// same view in the meantime; the first stored value wins and is what
    /// later lookups see, while this call returns the markup it fetched.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        view: &ViewName,
        origin: FragmentOrigin,
        fetch: F,
    ) -> Result<(String, CacheStatus), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        if let Some(content) = self.get(view) {
            return Ok((content, CacheStatus::Hit));
        }

        let content = fetch().await?;
        self.insert(view.clone(), content.clone(), origin);
        Ok((content, CacheStatus::Miss))
    }

    /// Number of cached views.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Cached view names, sorted.
    pub fn views(&self) -> Vec<ViewName> {
        let mut views: Vec<ViewName> = self.entries.borrow().keys().cloned().collect();
        views.sort();
        views
    }
}
