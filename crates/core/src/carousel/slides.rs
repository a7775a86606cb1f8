//! Discrete multi-slide carousel with responsive breakpoints
//!
//! State lives in [`CarouselState`], a plain value with no rendering side
//! effects. [`Carousel`] pairs it with a [`CarouselView`] and re-renders after
//! every applied transition.
//!
//! # Example
//!
//! ```
//! use vitrine_core::breakpoints::ViewportWidth;
//! use vitrine_core::carousel::CarouselState;
//! use vitrine_core::config::CarouselConfig;
//!
//! let config = CarouselConfig::slides();
//! let mut state = CarouselState::new(7, 300.0, &config, ViewportWidth::new(1200.0)?)?;
//! assert_eq!(state.max_visible(), 3);
//!
//! for _ in 0..4 {
//!     state.next();
//! }
//! assert_eq!(state.current_index(), 4);
//! assert!(state.frame().next_disabled);
//! # Ok::<(), vitrine_core::Error>(())
//! ```

use tracing::debug;

use super::{Nav, checked_item_width};
use crate::breakpoints::{BreakpointTable, ViewportWidth};
use crate::config::{CarouselConfig, ResizePolicy};
use crate::error::Error;
use crate::result::Result;

/// Everything a view needs to draw one carousel state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    /// Horizontal track translation in CSS pixels (zero or negative)
    pub offset_px: f64,
    /// Indicator that carries the active marker
    pub active_indicator: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl CarouselFrame {
    /// CSS `transform` value for the track.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset_px)
    }

    #[must_use]
    pub const fn disabled(&self, nav: Nav) -> bool {
        match nav {
            Nav::Prev => self.prev_disabled,
            Nav::Next => self.next_disabled,
        }
    }
}

/// Rendering surface of a discrete carousel.
pub trait CarouselView {
    /// Apply the track translation.
    fn set_track_offset(&mut self, offset_px: f64);

    /// Number of indicator markers the view owns.
    fn indicator_count(&self) -> usize;

    /// Toggle the active marker on one indicator.
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Toggle the disabled flag on a navigation control.
    fn set_nav_disabled(&mut self, nav: Nav, disabled: bool);
}

/// Index and visible-count state of one carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    slide_count: usize,
    slide_width: f64,
    gap_px: f64,
    current_index: usize,
    max_visible: usize,
    breakpoints: BreakpointTable,
    resize_policy: ResizePolicy,
}

impl CarouselState {
    /// Creates the state at index 0 with the visible count for `viewport`.
    ///
    /// `slide_width` is taken once; slides are assumed to share it.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyCarousel` if `slide_count` is zero
    /// - `Error::InvalidSlideWidth` if the width is negative or not finite
    /// - `Error::InvalidConfig` or `Error::InvalidBreakpoints` if `config`
    ///   fails [`CarouselConfig::validate`]
    pub fn new(
        slide_count: usize,
        slide_width: f64,
        config: &CarouselConfig,
        viewport: ViewportWidth,
    ) -> Result<Self> {
        if slide_count == 0 {
            return Err(Error::EmptyCarousel);
        }
        config.validate()?;
        let slide_width = checked_item_width(slide_width)?;
        let max_visible = config.breakpoints.visible_count(viewport);

        debug!(
            slide_count,
            slide_width, max_visible, "Carousel state initialized"
        );

        Ok(Self {
            slide_count,
            slide_width,
            gap_px: config.gap_px,
            current_index: 0,
            max_visible,
            breakpoints: config.breakpoints.clone(),
            resize_policy: config.resize_policy,
        })
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn max_visible(&self) -> usize {
        self.max_visible
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Largest index that still fills the viewport.
    ///
    /// Zero when fewer slides exist than fit on screen.
    #[must_use]
    pub const fn max_index(&self) -> usize {
        self.slide_count.saturating_sub(self.max_visible)
    }

    /// Distance the track moves per index step.
    #[must_use]
    pub fn step_px(&self) -> f64 {
        self.slide_width + self.gap_px
    }

    /// Re-derives the visible count from the breakpoint table.
    pub fn recompute_visible_count(&mut self, viewport: ViewportWidth) -> usize {
        self.max_visible = self.breakpoints.visible_count(viewport);
        self.max_visible
    }

    /// Moves to `index` if it lies within `[0, max_index]`.
    ///
    /// Out-of-range requests are ignored. Returns whether the move applied.
    pub fn go_to(&mut self, index: i64) -> bool {
        match usize::try_from(index) {
            Ok(target) if target <= self.max_index() => {
                self.current_index = target;
                debug!(index = target, "Carousel moved");
                true
            }
            _ => {
                debug!(index, max_index = self.max_index(), "Carousel move ignored");
                false
            }
        }
    }

    /// Advances one slide unless already at the bound.
    pub fn next(&mut self) -> bool {
        if self.current_index < self.max_index() {
            self.current_index = self.current_index.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Steps back one slide unless already at the start.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index = self.current_index.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Applies a viewport change according to the resize policy.
    pub fn resize(&mut self, viewport: ViewportWidth) {
        let before = self.max_visible;
        self.recompute_visible_count(viewport);

        if self.resize_policy == ResizePolicy::Clamp && self.current_index > self.max_index() {
            debug!(
                from = self.current_index,
                to = self.max_index(),
                "Carousel index clamped after resize"
            );
            self.current_index = self.max_index();
        }

        if before != self.max_visible {
            debug!(
                before,
                after = self.max_visible,
                "Carousel visible count changed"
            );
        }
    }

    /// Derives the render output from the current state.
    #[must_use]
    pub fn frame(&self) -> CarouselFrame {
        #[allow(clippy::cast_precision_loss)]
        let index = self.current_index as f64;

        CarouselFrame {
            offset_px: 0.0 - index * self.step_px(),
            active_indicator: self.current_index,
            prev_disabled: self.current_index == 0,
            next_disabled: self.current_index >= self.max_index(),
        }
    }
}

/// A carousel state bound to its view.
#[derive(Debug)]
pub struct Carousel<V> {
    state: CarouselState,
    view: V,
}

impl<V: CarouselView> Carousel<V> {
    /// Builds the state from the first slide's width and renders it once.
    ///
    /// # Errors
    ///
    /// Same as [`CarouselState::new`]. The view is left untouched on error.
    pub fn mount(
        slide_count: usize,
        first_slide_width: f64,
        view: V,
        config: &CarouselConfig,
        viewport: ViewportWidth,
    ) -> Result<Self> {
        let state = CarouselState::new(slide_count, first_slide_width, config, viewport)?;
        let mut carousel = Self { state, view };
        carousel.render();
        Ok(carousel)
    }

    /// Pushes the current frame into the view.
    pub fn render(&mut self) {
        let frame = self.state.frame();

        self.view.set_track_offset(frame.offset_px);
        for index in 0..self.view.indicator_count() {
            self.view
                .set_indicator_active(index, index == frame.active_indicator);
        }
        for nav in Nav::BOTH {
            self.view.set_nav_disabled(nav, frame.disabled(nav));
        }
    }

    pub fn go_to(&mut self, index: i64) -> bool {
        self.apply(|state| state.go_to(index))
    }

    pub fn next(&mut self) -> bool {
        self.apply(CarouselState::next)
    }

    pub fn previous(&mut self) -> bool {
        self.apply(CarouselState::previous)
    }

    /// Recomputes the visible count and re-renders unconditionally.
    pub fn on_resize(&mut self, viewport: ViewportWidth) {
        self.state.resize(viewport);
        self.render();
    }

    /// Dispatches a navigation control press.
    pub fn navigate(&mut self, nav: Nav) -> bool {
        match nav {
            Nav::Prev => self.previous(),
            Nav::Next => self.next(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    fn apply(&mut self, transition: impl FnOnce(&mut CarouselState) -> bool) -> bool {
        let applied = transition(&mut self.state);
        if applied {
            self.render();
        }
        applied
    }
}
