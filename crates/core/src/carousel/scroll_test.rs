//! Tests for the continuous scroll carousel

use super::Nav;
use super::scroll::{ButtonLook, ScrollCarousel, ScrollMetrics, ScrollView};
use crate::config::CarouselConfig;
use crate::error::Error;

#[derive(Debug, Default)]
struct RecordingScroll {
    scrolls: Vec<f64>,
    looks: Vec<(Nav, ButtonLook, f64)>,
}

impl RecordingScroll {
    fn last_look(&self, nav: Nav) -> Option<(ButtonLook, f64)> {
        self.looks
            .iter()
            .rev()
            .find(|(n, _, _)| *n == nav)
            .map(|(_, look, opacity)| (*look, *opacity))
    }
}

impl ScrollView for RecordingScroll {
    fn scroll_by(&mut self, dx: f64) {
        self.scrolls.push(dx);
    }

    fn set_nav_look(&mut self, nav: Nav, look: ButtonLook, opacity: f64) {
        self.looks.push((nav, look, opacity));
    }
}

const OVERFLOWING: ScrollMetrics = ScrollMetrics {
    scroll_left: 0.0,
    scroll_width: 2000.0,
    client_width: 800.0,
};

fn mount(initial: ScrollMetrics) -> Result<ScrollCarousel<RecordingScroll>, String> {
    ScrollCarousel::mount(
        8,
        250.0,
        RecordingScroll::default(),
        &CarouselConfig::pixels(),
        initial,
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod scroll_carousel_tests {
    use super::*;

    #[test]
    fn test_empty_strip_is_rejected() {
        let result = ScrollCarousel::mount(
            0,
            250.0,
            RecordingScroll::default(),
            &CarouselConfig::pixels(),
            OVERFLOWING,
        );
        assert!(matches!(result, Err(Error::EmptyCarousel)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CarouselConfig {
            dimmed_opacity: f64::NAN,
            ..CarouselConfig::pixels()
        };
        let result = ScrollCarousel::mount(8, 250.0, RecordingScroll::default(), &config, OVERFLOWING);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })), "{result:?}");
    }

    #[test]
    fn test_initial_looks_when_overflowing() -> Result<(), String> {
        let carousel = mount(OVERFLOWING)?;
        assert_eq!(carousel.look(Nav::Prev), ButtonLook::Dimmed);
        assert_eq!(carousel.look(Nav::Next), ButtonLook::Active);
        assert_eq!(
            carousel.view().last_look(Nav::Prev),
            Some((ButtonLook::Dimmed, 0.5))
        );
        assert_eq!(
            carousel.view().last_look(Nav::Next),
            Some((ButtonLook::Active, 1.0))
        );
        Ok(())
    }

    #[test]
    fn test_initial_next_dimmed_when_content_fits() -> Result<(), String> {
        let carousel = mount(ScrollMetrics {
            scroll_left: 0.0,
            scroll_width: 600.0,
            client_width: 800.0,
        })?;
        assert_eq!(carousel.look(Nav::Next), ButtonLook::Dimmed);
        Ok(())
    }

    #[test]
    fn test_navigation_scrolls_by_item_plus_gap() -> Result<(), String> {
        let mut carousel = mount(OVERFLOWING)?;
        assert_eq!(carousel.step_px(), 265.0);

        carousel.next();
        carousel.navigate(Nav::Prev);
        assert_eq!(carousel.view().scrolls, vec![265.0, -265.0]);
        Ok(())
    }

    #[test]
    fn test_scroll_updates_looks() -> Result<(), String> {
        let mut carousel = mount(OVERFLOWING)?;

        carousel.on_scroll(ScrollMetrics {
            scroll_left: 400.0,
            ..OVERFLOWING
        });
        assert_eq!(carousel.look(Nav::Prev), ButtonLook::Active);
        assert_eq!(carousel.look(Nav::Next), ButtonLook::Active);

        // Within the 5px tolerance of max scroll (1200).
        carousel.on_scroll(ScrollMetrics {
            scroll_left: 1196.0,
            ..OVERFLOWING
        });
        assert_eq!(carousel.look(Nav::Next), ButtonLook::Dimmed);

        carousel.on_scroll(OVERFLOWING);
        assert_eq!(carousel.look(Nav::Prev), ButtonLook::Dimmed);
        assert_eq!(carousel.look(Nav::Next), ButtonLook::Active);
        Ok(())
    }

    #[test]
    fn test_button_look_styles() {
        assert_eq!(ButtonLook::Active.cursor(), "pointer");
        assert_eq!(ButtonLook::Dimmed.cursor(), "not-allowed");
        assert_eq!(ButtonLook::Active.opacity(0.5), 1.0);
        assert_eq!(ButtonLook::Dimmed.opacity(0.3), 0.3);
    }
}
