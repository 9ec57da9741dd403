//! Declarative widget actions.
//!
//! View markup opts into page behaviour through data attributes:
//!
//! ```html
//! <button class="donate-option" data-action="donate" data-amount="25" data-interval="o">$25</button>
//! <button class="pill-btn" data-action="tab" data-tab="mentors">Mentors</button>
//! ```

use shell_sdk::prelude::*;

use crate::pages::{DonationInterval, UnknownInterval};

/// Attribute naming the action an element triggers.
pub const ACTION_ATTRIBUTE: &str = "data-action";

/// A user interaction a page widget handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// Pick a donation amount and interval. `None` lets the donor enter an amount.
    SelectDonation {
        amount: Option<u32>,
        interval: DonationInterval,
    },
    /// Open a volunteer tab.
    SwitchTab { tab: String },
}

/// Errors reading an action from element attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Unknown action: {0:?}")]
    UnknownAction(String),

    #[error("Action '{action}' is missing attribute '{attribute}'")]
    MissingAttribute {
        action: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid donation amount: {0:?}")]
    InvalidAmount(String),

    #[error(transparent)]
    InvalidInterval(#[from] UnknownInterval),
}

/// Errors dispatching an action to the current page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("No widget for '{action}' is bound to the current view")]
    NotBound { action: &'static str },

    #[error(transparent)]
    Action(#[from] ActionError),
}

impl WidgetAction {
    /// The action's `data-action` value.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetAction::SelectDonation { .. } => "donate",
            WidgetAction::SwitchTab { .. } => "tab",
        }
    }

    /// Read an action from attribute lookups.
    ///
    /// Returns `Ok(None)` when there is no `data-action` attribute.
    pub fn from_attributes(
        attribute: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ActionError> {
        let Some(action) = attribute(ACTION_ATTRIBUTE) else {
            return Ok(None);
        };

        let parsed = match action.trim() {
            "donate" => {
                let interval = attribute("data-interval")
                    .map(|raw| raw.trim().parse::<DonationInterval>())
                    .transpose()?
                    .unwrap_or(DonationInterval::OneTime);
                let amount = match attribute("data-amount") {
                    None => None,
                    Some(raw) => parse_amount(&raw)?,
                };
                WidgetAction::SelectDonation { amount, interval }
            }
            "tab" => {
                let tab = attribute("data-tab")
                    .map(|raw| raw.trim().to_string())
                    .filter(|tab| !tab.is_empty())
                    .ok_or(ActionError::MissingAttribute {
                        action: "tab",
                        attribute: "data-tab",
                    })?;
                WidgetAction::SwitchTab { tab }
            }
            other => return Err(ActionError::UnknownAction(other.to_string())),
        };
        Ok(Some(parsed))
    }

    /// Read an action from an element's attributes.
    pub fn from_element<D: Document>(
        document: &D,
        element: &D::Element,
    ) -> Result<Option<Self>, ActionError> {
        Self::from_attributes(|name| document.attribute(element, name))
    }
}

/// Empty and `custom` mean the donor enters the amount.
fn parse_amount(raw: &str) -> Result<Option<u32>, ActionError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("custom") {
        return Ok(None);
    }
    raw.trim_start_matches('$')
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ActionError::InvalidAmount(raw.to_string()))
}
