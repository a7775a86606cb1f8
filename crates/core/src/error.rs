//! Core error types for Vitrine widgets using Railway-Oriented Programming.
//!
//! None of these reach the page visitor. The DOM layer turns them into a
//! skipped widget and a debug log line.

use thiserror::Error;

/// Core error type for widget operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Markup errors
    #[error("carousel has no slides")]
    EmptyCarousel,

    #[error("required markup missing: {marker}")]
    MissingMarkup { marker: String },

    // Measurement errors
    #[error("invalid slide width: {width}")]
    InvalidSlideWidth { width: f64 },

    #[error("invalid viewport width: {width}")]
    InvalidViewportWidth { width: f64 },

    // Configuration errors
    #[error("invalid breakpoints: {reason}")]
    InvalidBreakpoints { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("{format} config parse error: {reason}")]
    ConfigParseFailed { format: &'static str, reason: String },

    // Modal host errors
    #[error("modal not found: {id}")]
    ModalNotFound { id: String },

    #[error("modal host failed: {reason}")]
    ModalHostFailed { reason: String },
}

impl Error {
    /// Create a missing markup error.
    pub fn missing_markup(marker: impl Into<String>) -> Self {
        Self::MissingMarkup {
            marker: marker.into(),
        }
    }

    /// Create an invalid breakpoints error.
    pub fn invalid_breakpoints(reason: impl Into<String>) -> Self {
        Self::InvalidBreakpoints {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a modal not found error.
    pub fn modal_not_found(id: impl Into<String>) -> Self {
        Self::ModalNotFound { id: id.into() }
    }

    /// Create a modal host error.
    pub fn modal_host_failed(reason: impl Into<String>) -> Self {
        Self::ModalHostFailed {
            reason: reason.into(),
        }
    }

    /// True for errors that mean "this page has no such widget".
    ///
    /// Absent markup is a valid page state, so callers skip quietly on these
    /// and log anything else as a warning.
    #[must_use]
    pub const fn is_absent_markup(&self) -> bool {
        matches!(self, Self::EmptyCarousel | Self::MissingMarkup { .. })
    }
}
