//! Stories from `data/blog.json`.

use serde::{Deserialize, Serialize};

/// One blog story summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogItem {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "preview")]
    pub excerpt: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
