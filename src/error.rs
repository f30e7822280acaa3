//! Error taxonomy shared by every controller feature.
//!
//! Errors never escape a feature boundary: handlers log them and, where the
//! user needs to know, raise an alert. Nothing here is fatal to the page.

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("could not open {url}: {reason}")]
    OpenFailed { url: String, reason: String },
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ControllerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}
