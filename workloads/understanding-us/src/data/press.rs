//! Press coverage entries from `data/press.json`.

use serde::{Deserialize, Serialize};

/// One piece of press coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressItem {
    pub title: String,
    #[serde(default)]
    pub date: String,
    /// Outlet that published the piece.
    #[serde(default)]
    pub source: String,
    /// Where the piece lives; opened in a new tab.
    #[serde(default)]
    pub link: String,
}
