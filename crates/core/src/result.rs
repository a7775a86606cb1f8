//! Result alias and the skip combinators used when attaching widgets.
//!
//! Widgets are progressive enhancement: a failure at attach time must leave
//! the page usable. Missing markup is the normal case on most pages and is
//! only worth a debug line; anything else is a real fault.

use crate::error::Error;

/// The standard Result type for Vitrine operations.
///
/// # Examples
///
/// ```
/// use vitrine_core::{Error, Result};
///
/// fn first_width(widths: &[f64]) -> Result<f64> {
///     widths.first().copied().ok_or(Error::EmptyCarousel)
/// }
///
/// assert!(first_width(&[]).is_err());
/// assert_eq!(first_width(&[280.0]), Ok(280.0));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

pub trait ResultExt<T> {
    /// Turns absent markup into `Ok(None)`; other errors still propagate.
    ///
    /// # Errors
    ///
    /// Returns the original error unless it is absent markup.
    fn skip_absent(self, widget: &str) -> Result<Option<T>>;

    /// Drops any error after logging it under `widget`.
    fn into_option_logged(self, widget: &str) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn skip_absent(self, widget: &str) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_absent_markup() => {
                tracing::debug!(widget, error = %e, "Widget skipped");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn into_option_logged(self, widget: &str) -> Option<T> {
        self.skip_absent(widget).unwrap_or_else(|e| {
            tracing::warn!(widget, error = %e, "Widget not attached");
            None
        })
    }
}
