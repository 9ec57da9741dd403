//! Shell configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::view::ViewName;

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("home view '{0}' is not in the known view set")]
    UnknownHome(ViewName),
}

/// Configuration for the view router and preloader.
///
/// Every field defaults to the value the live site uses, so a TOML document
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Id of the element views are rendered into.
    pub container_id: String,
    /// Every view the preloader warms.
    pub views: Vec<ViewName>,
    /// View rendered for an empty fragment.
    pub home_view: ViewName,
    /// Directory fragments are served from, relative to the page.
    pub views_dir: String,
    /// File extension of a view fragment.
    pub view_extension: String,
    /// Delay between initial load and the preload pass.
    pub preload_delay_ms: u64,
    /// Maximum number of preload fetches in flight at once.
    pub preload_concurrency: usize,
}

const DEFAULT_VIEWS: [&str; 9] = [
    "home",
    "practice",
    "volunteer",
    "media",
    "blog",
    "team",
    "donate",
    "family",
    "impact",
];

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            container_id: "app-container".to_string(),
            views: DEFAULT_VIEWS.into_iter().map(ViewName::from_trusted).collect(),
            home_view: ViewName::from_trusted("home"),
            views_dir: "views".to_string(),
            view_extension: "html".to_string(),
            preload_delay_ms: 2000,
            preload_concurrency: 4,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document, filling unspecified fields with defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.views.contains(&self.home_view) {
            return Err(ConfigError::UnknownHome(self.home_view.clone()));
        }
        Ok(())
    }

    /// Set the preload fan-out width.
    pub fn with_preload_concurrency(mut self, concurrency: usize) -> Self {
        self.preload_concurrency = concurrency;
        self
    }

    /// Relative path of a view's fragment, e.g. `views/home.html`.
    pub fn view_path(&self, view: &ViewName) -> String {
        format!(
            "{}/{}.{}",
            self.views_dir.trim_end_matches('/'),
            view,
            self.view_extension
        )
    }

    /// Delay before the preload pass.
    pub fn preload_delay(&self) -> Duration {
        Duration::from_millis(self.preload_delay_ms)
    }
}
