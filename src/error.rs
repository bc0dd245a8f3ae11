use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the section router. The only one is an unknown page id, which
/// callers of `navigate_to` never see: it is absorbed and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("no section with id `{0}`")]
    UnknownPage(String),
}

/// Failures reported by the browser facilities behind `Platform`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("browser facility unavailable: {0}")]
    Unavailable(&'static str),
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("history state error: {0}")]
    State(String),
}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for PlatformError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        PlatformError::State(err.to_string())
    }
}

/// Why a contact-form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("please enter a valid phone number")]
    InvalidPhone,
}
