//! Fetch client over a [`Transport`].

use serde::de::DeserializeOwned;

use crate::resource::ResourceKind;
use crate::transport::Transport;

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Deserialization error for {url}: {message}")]
    Deserialization { url: String, message: String },
}

impl FetchError {
    /// The URL the failed fetch targeted.
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. }
            | Self::Transport { url, .. }
            | Self::Deserialization { url, .. } => url,
        }
    }
}

/// Fetches static assets relative to the page.
///
/// Any non-2xx status is an error; no request is ever retried.
pub struct FetchClient<T> {
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    /// Create a new fetch client.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch a resource as text.
    pub async fn fetch_text(&self, url: &str, kind: ResourceKind) -> Result<String, FetchError> {
        tracing::debug!(%kind, url, "fetching");
        let response = self
            .transport
            .get(url)
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                url: url.to_string(),
            });
        }

        Ok(response.body)
    }

    /// Fetch a resource and decode it as JSON.
    pub async fn fetch_json<V: DeserializeOwned>(
        &self,
        url: &str,
        kind: ResourceKind,
    ) -> Result<V, FetchError> {
        let body = self.fetch_text(url, kind).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Deserialization {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
