//! Error types for the DOM bindings
//!
//! This module follows the project's zero-unwrap pattern: every failed DOM
//! call becomes a `UiError`, and the attach layer decides whether that means
//! "skip this widget quietly" or "log it".

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while binding widgets to the page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// Not running in a browser context
    #[error("No window object available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    /// A DOM or framework call threw
    #[error("JavaScript error: {0}")]
    Js(String),

    /// A marker matched an element of the wrong kind
    #[error("Element for '{selector}' is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    /// Slide data handed to a component could not be decoded
    #[error("Invalid slide data: {0}")]
    InvalidSlides(String),

    /// A widget model rejected the markup or configuration
    #[error(transparent)]
    Core(#[from] vitrine_core::Error),
}

impl UiError {
    /// Wraps a thrown JS value, keeping its debug rendering.
    #[must_use]
    pub fn js(value: &JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }

    pub fn wrong_type(selector: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongElementType {
            selector: selector.into(),
            expected,
        }
    }

    /// True when the page simply does not contain the widget.
    #[must_use]
    pub const fn is_absent_markup(&self) -> bool {
        match self {
            Self::Core(core) => core.is_absent_markup(),
            _ => false,
        }
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        Self::from_str(&error.to_string())
    }
}

/// Result type alias for DOM binding operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UiError::NoWindow.to_string(), "No window object available");
        assert_eq!(
            UiError::wrong_type(".carousel-track", "HtmlElement").to_string(),
            "Element for '.carousel-track' is not a HtmlElement"
        );
        assert_eq!(
            UiError::from(vitrine_core::Error::EmptyCarousel).to_string(),
            "carousel has no slides"
        );
    }

    #[test]
    fn test_absent_markup_passthrough() {
        assert!(UiError::from(vitrine_core::Error::EmptyCarousel).is_absent_markup());
        assert!(
            UiError::from(vitrine_core::Error::missing_markup(".btn-carousel-next"))
                .is_absent_markup()
        );
        assert!(!UiError::NoDocument.is_absent_markup());
        assert!(!UiError::Js("TypeError".to_string()).is_absent_markup());
    }
}
