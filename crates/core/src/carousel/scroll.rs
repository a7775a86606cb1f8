//! Continuous scroll carousel
//!
//! The viewport scrolls natively; this controller only issues scroll-by
//! requests of one item plus gap and keeps the navigation buttons' look in
//! sync with the reported scroll position.

use tracing::debug;

use super::{Nav, checked_item_width};
use crate::config::CarouselConfig;
use crate::error::Error;
use crate::result::Result;

/// Scroll geometry reported by the viewport after each scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// `scrollLeft` of the clipped viewport
    pub scroll_left: f64,
    /// `scrollWidth` of the track
    pub scroll_width: f64,
    /// `clientWidth` of the viewport
    pub client_width: f64,
}

impl ScrollMetrics {
    /// Furthest reachable `scroll_left`.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }

    /// True when the whole track fits without scrolling.
    #[must_use]
    pub fn fits(&self) -> bool {
        self.scroll_width <= self.client_width
    }
}

/// Visual state of a scroll navigation button.
///
/// The buttons stay clickable in both looks; the browser clamps the scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLook {
    Active,
    Dimmed,
}

impl ButtonLook {
    #[must_use]
    pub const fn from_dimmed(dimmed: bool) -> Self {
        if dimmed { Self::Dimmed } else { Self::Active }
    }

    /// CSS opacity for this look.
    #[must_use]
    pub const fn opacity(self, dimmed_opacity: f64) -> f64 {
        match self {
            Self::Active => 1.0,
            Self::Dimmed => dimmed_opacity,
        }
    }

    /// CSS cursor for this look.
    #[must_use]
    pub const fn cursor(self) -> &'static str {
        match self {
            Self::Active => "pointer",
            Self::Dimmed => "not-allowed",
        }
    }
}

/// Rendering surface of a scroll carousel.
pub trait ScrollView {
    /// Request a smooth horizontal scroll by `dx` CSS pixels.
    fn scroll_by(&mut self, dx: f64);

    /// Apply a button look (opacity and cursor).
    fn set_nav_look(&mut self, nav: Nav, look: ButtonLook, opacity: f64);
}

#[derive(Debug)]
pub struct ScrollCarousel<V> {
    step_px: f64,
    end_tolerance_px: f64,
    dimmed_opacity: f64,
    prev: ButtonLook,
    next: ButtonLook,
    view: V,
}

impl<V: ScrollView> ScrollCarousel<V> {
    /// Binds the controller and applies the initial button looks.
    ///
    /// Initially the previous button is dimmed, and the next button is dimmed
    /// only when the track already fits in the viewport.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyCarousel` if there are no items
    /// - `Error::InvalidSlideWidth` if the first item width is unusable
    /// - `Error::InvalidConfig` if `config` fails [`CarouselConfig::validate`]
    pub fn mount(
        item_count: usize,
        first_item_width: f64,
        view: V,
        config: &CarouselConfig,
        initial: ScrollMetrics,
    ) -> Result<Self> {
        if item_count == 0 {
            return Err(Error::EmptyCarousel);
        }
        config.validate()?;
        let item_width = checked_item_width(first_item_width)?;

        let mut carousel = Self {
            step_px: item_width + config.gap_px,
            end_tolerance_px: config.end_tolerance_px,
            dimmed_opacity: config.dimmed_opacity,
            prev: ButtonLook::Dimmed,
            next: ButtonLook::from_dimmed(initial.fits()),
            view,
        };
        debug!(step_px = carousel.step_px, item_count, "Scroll carousel mounted");
        carousel.apply_looks();
        Ok(carousel)
    }

    /// Distance scrolled per button press.
    #[must_use]
    pub const fn step_px(&self) -> f64 {
        self.step_px
    }

    #[must_use]
    pub const fn look(&self, nav: Nav) -> ButtonLook {
        match nav {
            Nav::Prev => self.prev,
            Nav::Next => self.next,
        }
    }

    pub fn next(&mut self) {
        self.view.scroll_by(self.step_px);
    }

    pub fn previous(&mut self) {
        self.view.scroll_by(0.0 - self.step_px);
    }

    pub fn navigate(&mut self, nav: Nav) {
        match nav {
            Nav::Prev => self.previous(),
            Nav::Next => self.next(),
        }
    }

    /// Re-derives both button looks from the reported scroll position.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.prev = ButtonLook::from_dimmed(metrics.scroll_left <= 0.0);
        self.next = ButtonLook::from_dimmed(
            metrics.scroll_left >= metrics.max_scroll() - self.end_tolerance_px,
        );
        self.apply_looks();
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    fn apply_looks(&mut self) {
        for nav in Nav::BOTH {
            let look = self.look(nav);
            self.view
                .set_nav_look(nav, look, look.opacity(self.dimmed_opacity));
        }
    }
}
