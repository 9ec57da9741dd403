//! View names resolved from the navigation fragment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a token cannot name a view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewNameError {
    #[error("view name is empty")]
    Empty,

    #[error("view name '{0}' contains characters outside [A-Za-z0-9_-]")]
    InvalidCharacters(String),
}

/// Name of a view, e.g. `home` or `donate`.
///
/// Only ASCII alphanumerics, `-` and `_` are accepted, so a name can always be
/// spliced into a relative fragment path without escaping the views directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewName(String);

impl ViewName {
    /// Create a view name, validating the token.
    pub fn new(name: impl Into<String>) -> Result<Self, ViewNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ViewNameError::Empty);
        }
        let valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ViewNameError::InvalidCharacters(name));
        }
        Ok(Self(name))
    }

    /// Built-in names known to satisfy the token rules.
    pub(crate) fn from_trusted(name: &'static str) -> Self {
        Self(name.to_string())
    }

    /// Resolve the view requested by a fragment identifier.
    ///
    /// A leading `#` is stripped; an empty fragment falls back to `home`.
    pub fn from_fragment(fragment: &str, home: &ViewName) -> Result<Self, ViewNameError> {
        let token = fragment.strip_prefix('#').unwrap_or(fragment);
        if token.is_empty() {
            return Ok(home.clone());
        }
        Self::new(token)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ViewName {
    type Error = ViewNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ViewName> for String {
    fn from(view: ViewName) -> Self {
        view.0
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
