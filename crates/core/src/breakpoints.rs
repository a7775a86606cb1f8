//! Responsive breakpoints mapping viewport width to visible slide count
//!
//! The default table reproduces the exhibition layout: below 768px one slide
//! is visible, below 992px two, otherwise three.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// A validated viewport width in CSS pixels.
///
/// Rejects NaN, infinity and negative widths.
///
/// # Examples
///
/// ```
/// use vitrine_core::breakpoints::ViewportWidth;
///
/// let width = ViewportWidth::new(1200.0)?;
/// assert_eq!(width.value(), 1200.0);
///
/// assert!(ViewportWidth::new(f64::NAN).is_err());
/// assert!(ViewportWidth::new(-1.0).is_err());
/// # Ok::<(), vitrine_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ViewportWidth(f64);

impl ViewportWidth {
    /// Creates a new `ViewportWidth`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidViewportWidth` if the width is not finite or is
    /// negative.
    pub fn new(width: f64) -> Result<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(Error::InvalidViewportWidth { width });
        }
        Ok(Self(width))
    }

    /// Returns the width in CSS pixels.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// One row of a breakpoint table: widths strictly below `below` show
/// `visible` slides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Exclusive upper bound in CSS pixels
    pub below: f64,
    /// Slides visible under this bound
    pub visible: usize,
}

/// Ordered breakpoint table with a fallback for wide viewports.
///
/// # Examples
///
/// ```
/// use vitrine_core::breakpoints::{BreakpointTable, ViewportWidth};
///
/// let table = BreakpointTable::default();
/// assert_eq!(table.visible_count(ViewportWidth::new(600.0)?), 1);
/// assert_eq!(table.visible_count(ViewportWidth::new(800.0)?), 2);
/// assert_eq!(table.visible_count(ViewportWidth::new(1200.0)?), 3);
/// # Ok::<(), vitrine_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
    steps: Vec<Breakpoint>,
    fallback: usize,
}

impl BreakpointTable {
    /// Creates a validated breakpoint table.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBreakpoints` if any bound is non-finite or
    /// non-positive, the bounds are not strictly ascending, or any visible
    /// count (including the fallback) is zero.
    pub fn new(steps: Vec<Breakpoint>, fallback: usize) -> Result<Self> {
        let table = Self { steps, fallback };
        table.validate()?;
        Ok(table)
    }

    /// Checks the table invariants.
    ///
    /// Deserialized tables bypass [`BreakpointTable::new`], so configuration
    /// loading calls this explicitly.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BreakpointTable::new`].
    pub fn validate(&self) -> Result<()> {
        if self.fallback == 0 {
            return Err(Error::invalid_breakpoints("fallback visible count is zero"));
        }

        self.steps
            .iter()
            .try_fold(0.0_f64, |previous, step| {
                if !step.below.is_finite() || step.below <= 0.0 {
                    return Err(Error::invalid_breakpoints(format!(
                        "bound {} is not a positive finite width",
                        step.below
                    )));
                }
                if step.below <= previous {
                    return Err(Error::invalid_breakpoints(format!(
                        "bound {} does not exceed previous bound {}",
                        step.below, previous
                    )));
                }
                if step.visible == 0 {
                    return Err(Error::invalid_breakpoints(format!(
                        "bound {} shows zero slides",
                        step.below
                    )));
                }
                Ok(step.below)
            })
            .map(|_| ())
    }

    /// Maps a viewport width to the number of simultaneously visible slides.
    ///
    /// Never returns zero, even for an unvalidated table.
    #[must_use]
    pub fn visible_count(&self, width: ViewportWidth) -> usize {
        self.steps
            .iter()
            .find(|step| width.value() < step.below)
            .map_or(self.fallback, |step| step.visible)
            .max(1)
    }

    /// The ordered rows of the table.
    #[must_use]
    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    /// Visible count used at and above the last bound.
    #[must_use]
    pub const fn fallback(&self) -> usize {
        self.fallback
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            steps: vec![
                Breakpoint {
                    below: 768.0,
                    visible: 1,
                },
                Breakpoint {
                    below: 992.0,
                    visible: 2,
                },
            ],
            fallback: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(px: f64) -> ViewportWidth {
        ViewportWidth(px)
    }

    #[test]
    fn test_default_table_edges() {
        let table = BreakpointTable::default();
        assert_eq!(table.visible_count(width(0.0)), 1);
        assert_eq!(table.visible_count(width(767.9)), 1);
        assert_eq!(table.visible_count(width(768.0)), 2);
        assert_eq!(table.visible_count(width(991.0)), 2);
        assert_eq!(table.visible_count(width(992.0)), 3);
        assert_eq!(table.visible_count(width(4000.0)), 3);
    }

    #[test]
    fn test_default_table_is_valid() {
        assert!(BreakpointTable::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_descending_bounds() {
        let result = BreakpointTable::new(
            vec![
                Breakpoint {
                    below: 992.0,
                    visible: 2,
                },
                Breakpoint {
                    below: 768.0,
                    visible: 1,
                },
            ],
            3,
        );
        assert!(matches!(result, Err(Error::InvalidBreakpoints { .. })));
    }

    #[test]
    fn test_rejects_zero_counts() {
        assert!(BreakpointTable::new(vec![], 0).is_err());
        assert!(
            BreakpointTable::new(
                vec![Breakpoint {
                    below: 500.0,
                    visible: 0
                }],
                2
            )
            .is_err()
        );
    }

    #[test]
    fn test_rejects_non_finite_bound() {
        let result = BreakpointTable::new(
            vec![Breakpoint {
                below: f64::INFINITY,
                visible: 1,
            }],
            2,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_steps_use_fallback() -> Result<()> {
        let table = BreakpointTable::new(vec![], 4)?;
        assert_eq!(table.visible_count(width(320.0)), 4);
        Ok(())
    }

    #[test]
    fn test_viewport_width_validation() {
        assert!(ViewportWidth::new(0.0).is_ok());
        assert!(ViewportWidth::new(f64::INFINITY).is_err());
        assert!(ViewportWidth::new(-0.5).is_err());
    }
}
