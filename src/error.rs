//! Error taxonomy for the page behaviour layer.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is surfaced to the visitor. Event handlers and the status
//! poll log a `SiteError` and carry on; the enum exists so the failure cause
//! is explicit in logs and tests.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("status endpoint returned {status}")]
    Status { status: u16 },
    #[error("malformed status body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Config(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}

#[cfg(feature = "browser")]
impl SiteError {
    /// Wrap a JS exception thrown by a DOM call.
    pub(crate) fn dom(err: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}
