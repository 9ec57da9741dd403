//! `window.fetch` binding of the HTTP seam.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::transport::{FetchResponse, Transport, TransportError};

/// Transport backed by the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct BrowserTransport;

impl BrowserTransport {
    /// Create a new browser transport.
    pub fn new() -> Self {
        Self
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> TransportError {
    TransportError(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, path: &str) -> Result<FetchResponse, TransportError> {
        let window =
            web_sys::window().ok_or_else(|| TransportError("no global window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(js_error)?;
        let status = response.status();

        let text = response.text().map_err(js_error)?;
        let body = JsFuture::from(text).await.map_err(js_error)?;

        Ok(FetchResponse::new(status, body.as_string().unwrap_or_default()))
    }
}
