//! Crate-wide error type for browser-facing operations.
//!
//! None of these errors are user-visible. Component code logs them and
//! keeps rendering; the theme controller treats read failures as "no
//! preference" and falls back to light.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures raised by the document, storage and color-scheme adapters.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("document has no <head> element")]
    NoHead,
    #[error("document has no root element")]
    NoRootElement,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("color scheme query is unavailable")]
    MediaQueryUnavailable,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("unrecognized theme value {0:?}")]
    UnknownTheme(String),
    #[error("structured data encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
