//! Carousel controllers
//!
//! Two configurations of the same component:
//! - [`slides`]: discrete mode. Translates a track by whole slides, keeps
//!   indicators in sync and adapts the visible count to breakpoints.
//! - [`scroll`]: continuous mode. Scrolls a clipped viewport by one item
//!   width and dims the navigation buttons at either end.
//!
//! Controllers never touch the DOM themselves; they drive a view trait so
//! they can be exercised in plain unit tests.

pub mod scroll;
pub mod slides;

#[cfg(test)]
mod scroll_test;

pub use scroll::{ButtonLook, ScrollCarousel, ScrollMetrics, ScrollView};
pub use slides::{Carousel, CarouselFrame, CarouselState, CarouselView};

/// One of the two directional navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nav {
    Prev,
    Next,
}

impl Nav {
    /// Both controls, previous first.
    pub const BOTH: [Self; 2] = [Self::Prev, Self::Next];
}

/// Rejects slide widths that would poison the offset arithmetic.
pub(crate) fn checked_item_width(width: f64) -> crate::Result<f64> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(crate::Error::InvalidSlideWidth { width })
    }
}
