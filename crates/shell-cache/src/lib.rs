//! Session fragment cache for the Understanding Us site shell.
//!
//! This crate provides:
//! - `FragmentCache` - View name to markup map with insert-if-absent writes
//! - `CachedFragment` - A cached entry and where it came from
//! - `CacheStatus` - Hit/miss reporting for navigation outcomes
//!
//! # Example
//!
//! ```ignore
//! let cache = FragmentCache::new();
//! let (html, status) = cache
//!     .get_or_fetch(&view, FragmentOrigin::Navigation, || client.fetch_text(&path))
//!     .await?;
//! ```

mod fragment;

pub use fragment::*;
