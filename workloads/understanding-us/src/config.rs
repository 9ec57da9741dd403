//! Site settings.

use serde::{Deserialize, Serialize};
use shell_sdk::shell_core::{ConfigError, SiteConfig};

/// All settings for the site, loadable from TOML.
///
/// ```toml
/// site_name = "understanding-us"
///
/// [shell]
/// preload_delay_ms = 2000
///
/// [donation]
/// embed_url = "https://donorbox.org/embed/understanding-us"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Name attached to every log entry.
    pub site_name: String,
    /// Router and preloader settings.
    pub shell: SiteConfig,
    /// Donation selector settings.
    pub donation: DonationSettings,
    /// Volunteer tab settings.
    pub tabs: TabSettings,
    /// Press list settings.
    pub press: PressSettings,
    /// Blog list settings.
    pub blog: BlogSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "understanding-us".to_string(),
            shell: SiteConfig::default(),
            donation: DonationSettings::default(),
            tabs: TabSettings::default(),
            press: PressSettings::default(),
            blog: BlogSettings::default(),
        }
    }
}

impl SiteSettings {
    /// Parse a TOML document, filling unspecified fields with defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(raw)?;
        settings.shell.validate()?;
        Ok(settings)
    }
}

/// Donation selector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationSettings {
    /// Payment embed the frame is pointed at.
    pub embed_url: String,
    /// Class shared by every amount option.
    pub option_class: String,
    /// Class marking the chosen option.
    pub selected_class: String,
    /// Id of the payment frame.
    pub frame_id: String,
}

impl Default for DonationSettings {
    fn default() -> Self {
        Self {
            embed_url: "https://donorbox.org/embed/understanding-us".to_string(),
            option_class: "donate-option".to_string(),
            selected_class: "selected".to_string(),
            frame_id: "dbox-iframe".to_string(),
        }
    }
}

/// Volunteer tab settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSettings {
    /// Class shared by every tab panel.
    pub panel_class: String,
    /// Panel ids are this prefix followed by the tab id.
    pub panel_prefix: String,
    /// Class shared by every tab button.
    pub button_class: String,
    /// Attribute naming the tab a button opens.
    pub tab_attribute: String,
    /// Class marking the open panel and its button.
    pub active_class: String,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            panel_class: "tab-content".to_string(),
            panel_prefix: "tab-".to_string(),
            button_class: "pill-btn".to_string(),
            tab_attribute: "data-tab".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Where a JSON list is fetched from and rendered into.
#[derive(Debug, Clone, Copy)]
pub struct ListTarget<'a> {
    pub container_id: &'a str,
    pub data_path: &'a str,
    pub placeholder: &'a str,
}

/// Press list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressSettings {
    pub container_id: String,
    pub data_path: String,
    /// Text shown when the press data cannot be loaded.
    pub placeholder: String,
}

impl Default for PressSettings {
    fn default() -> Self {
        Self {
            container_id: "press-container".to_string(),
            data_path: "data/press.json".to_string(),
            placeholder: "News archive loading...".to_string(),
        }
    }
}

impl PressSettings {
    pub fn target(&self) -> ListTarget<'_> {
        ListTarget {
            container_id: &self.container_id,
            data_path: &self.data_path,
            placeholder: &self.placeholder,
        }
    }
}

/// Blog list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogSettings {
    pub container_id: String,
    pub data_path: String,
    /// Text shown when the blog data cannot be loaded.
    pub placeholder: String,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            container_id: "blog-container".to_string(),
            data_path: "data/blog.json".to_string(),
            placeholder: "Stories loading...".to_string(),
        }
    }
}

impl BlogSettings {
    pub fn target(&self) -> ListTarget<'_> {
        ListTarget {
            container_id: &self.container_id,
            data_path: &self.data_path,
            placeholder: &self.placeholder,
        }
    }
}
