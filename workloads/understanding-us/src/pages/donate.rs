//! Donation amount and interval selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shell_sdk::prelude::*;

use crate::config::DonationSettings;

/// How often a donation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonationInterval {
    #[serde(rename = "o")]
    OneTime,
    #[serde(rename = "m")]
    Monthly,
    #[serde(rename = "q")]
    Quarterly,
    #[serde(rename = "a")]
    Annual,
}

impl DonationInterval {
    /// The code the payment embed expects.
    pub fn code(&self) -> &'static str {
        match self {
            DonationInterval::OneTime => "o",
            DonationInterval::Monthly => "m",
            DonationInterval::Quarterly => "q",
            DonationInterval::Annual => "a",
        }
    }
}

impl fmt::Display for DonationInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An interval code that is not one of `o`, `m`, `q` or `a`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown donation interval: {0:?}")]
pub struct UnknownInterval(pub String);

impl FromStr for DonationInterval {
    type Err = UnknownInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o" => Ok(DonationInterval::OneTime),
            "m" => Ok(DonationInterval::Monthly),
            "q" => Ok(DonationInterval::Quarterly),
            "a" => Ok(DonationInterval::Annual),
            other => Err(UnknownInterval(other.to_string())),
        }
    }
}

/// Highlights the chosen amount and points the payment frame at it.
#[derive(Debug, Clone)]
pub struct DonationWidget {
    settings: DonationSettings,
}

impl DonationWidget {
    pub fn new(settings: DonationSettings) -> Self {
        Self { settings }
    }

    /// Embed URL for an amount and interval.
    ///
    /// A missing or zero amount leaves the amount for the donor to enter.
    pub fn embed_url(&self, amount: Option<u32>, interval: DonationInterval) -> String {
        let base = &self.settings.embed_url;
        let separator = if base.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{}default_interval={}", base, separator, interval.code());
        if let Some(amount) = amount.filter(|a| *a > 0) {
            url.push_str(&format!("&amount={}", amount));
        }
        url
    }

    /// Select a donation option.
    ///
    /// Every option loses the selected class and `trigger`, when present,
    /// gains it. The frame's source is updated if the frame exists. Returns
    /// the embed URL either way.
    pub fn select<D: Document>(
        &self,
        document: &D,
        amount: Option<u32>,
        interval: DonationInterval,
        trigger: Option<&D::Element>,
    ) -> String {
        for option in document.elements_by_class(&self.settings.option_class) {
            document.remove_class(&option, &self.settings.selected_class);
        }
        if let Some(trigger) = trigger {
            document.add_class(trigger, &self.settings.selected_class);
        }

        let url = self.embed_url(amount, interval);
        if let Some(frame) = document.element_by_id(&self.settings.frame_id) {
            document.set_attribute(&frame, "src", &url);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<button class="donate-option selected">$10</button><button class="donate-option">$25</button><button class="donate-option">Other</button><iframe id="dbox-iframe" src="about:blank"></iframe>"#;

    fn widget() -> DonationWidget {
        DonationWidget::new(DonationSettings::default())
    }

    #[test]
    fn test_interval_codes() {
        for code in ["o", "m", "q", "a"] {
            let interval: DonationInterval = code.parse().unwrap();
            assert_eq!(interval.to_string(), code);
        }
        assert_eq!("weekly".parse::<DonationInterval>(), Err(UnknownInterval("weekly".into())));
    }

    #[test]
    fn test_interval_serializes_as_code() {
        assert_eq!(serde_json::to_string(&DonationInterval::Quarterly).unwrap(), r#""q""#);
        let annual: DonationInterval = serde_json::from_str(r#""a""#).unwrap();
        assert_eq!(annual, DonationInterval::Annual);
        assert!(serde_json::from_str::<DonationInterval>(r#""Annual""#).is_err());
    }

    #[test]
    fn test_embed_url() {
        let w = widget();
        assert_eq!(
            w.embed_url(Some(25), DonationInterval::OneTime),
            "https://donorbox.org/embed/understanding-us?default_interval=o&amount=25"
        );
        assert_eq!(
            w.embed_url(None, DonationInterval::Monthly),
            "https://donorbox.org/embed/understanding-us?default_interval=m"
        );
        assert_eq!(
            w.embed_url(Some(0), DonationInterval::Annual),
            "https://donorbox.org/embed/understanding-us?default_interval=a"
        );
    }

    #[test]
    fn test_embed_url_with_existing_query() {
        let w = DonationWidget::new(DonationSettings {
            embed_url: "https://pay.example/embed?campaign=spring".to_string(),
            ..DonationSettings::default()
        });
        assert_eq!(
            w.embed_url(Some(5), DonationInterval::Quarterly),
            "https://pay.example/embed?campaign=spring&default_interval=q&amount=5"
        );
    }

    #[test]
    fn test_select_moves_highlight_and_updates_frame() {
        let document = MemoryDocument::with_body(PAGE);
        let options = document.elements_by_class("donate-option");
        let w = widget();

        w.select(&document, Some(25), DonationInterval::OneTime, Some(&options[1]));

        let selected: Vec<_> = options
            .iter()
            .filter(|o| document.has_class(o, "selected"))
            .collect();
        assert_eq!(selected, vec![&options[1]]);
        let frame = document.element_by_id("dbox-iframe").unwrap();
        assert_eq!(
            document.attribute(&frame, "src").as_deref(),
            Some("https://donorbox.org/embed/understanding-us?default_interval=o&amount=25")
        );
    }

    #[test]
    fn test_select_without_trigger_clears_highlight() {
        let document = MemoryDocument::with_body(PAGE);
        widget().select(&document, None, DonationInterval::Monthly, None);
        assert!(document
            .elements_by_class("donate-option")
            .iter()
            .all(|o| !document.has_class(o, "selected")));
    }

    #[test]
    fn test_select_without_frame() {
        let document =
            MemoryDocument::with_body(r#"<button class="donate-option">$10</button>"#);
        let option = document.elements_by_class("donate-option")[0];
        let url = widget().select(&document, Some(10), DonationInterval::OneTime, Some(&option));
        assert!(url.ends_with("amount=10"));
        assert!(document.has_class(&option, "selected"));
    }
}
