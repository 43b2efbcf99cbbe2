//! Error types for the portfolio site.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A node the page markup must provide was not found
    #[error("required element `{name}` not found (selector `{selector}`)")]
    MissingElement {
        name: &'static str,
        selector: String,
    },

    /// A node was found but is not the element type the controller needs
    #[error("element `{name}` (selector `{selector}`) is not an HTML element")]
    WrongElementType {
        name: &'static str,
        selector: String,
    },

    #[error("no global window object")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("typing animation needs at least one phrase")]
    EmptyPhrases,

    /// Failure reported by a browser API
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
