//! DOM implementations of the core view traits

use vitrine_core::carousel::{ButtonLook, CarouselView, Nav, ScrollView};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::set_style;

/// Sets the `disabled` state on a button, or the attribute on anything else.
fn set_disabled(element: &Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
        return;
    }

    let result = if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    };
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Failed to toggle disabled: {e:?}").into());
    }
}

/// Track, indicators and arrow buttons of one slide carousel.
#[derive(Debug, Clone)]
pub struct DomCarouselView {
    track: HtmlElement,
    indicators: Vec<Element>,
    prev: Element,
    next: Element,
    active_class: String,
}

impl DomCarouselView {
    #[must_use]
    pub const fn new(
        track: HtmlElement,
        indicators: Vec<Element>,
        prev: Element,
        next: Element,
        active_class: String,
    ) -> Self {
        Self {
            track,
            indicators,
            prev,
            next,
            active_class,
        }
    }

    #[must_use]
    pub fn indicators(&self) -> &[Element] {
        &self.indicators
    }

    #[must_use]
    pub const fn nav(&self, nav: Nav) -> &Element {
        match nav {
            Nav::Prev => &self.prev,
            Nav::Next => &self.next,
        }
    }
}

impl CarouselView for DomCarouselView {
    fn set_track_offset(&mut self, offset_px: f64) {
        set_style(
            &self.track,
            "transform",
            &format!("translateX({offset_px}px)"),
        );
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        let Some(indicator) = self.indicators.get(index) else {
            return;
        };
        if let Err(e) = indicator
            .class_list()
            .toggle_with_force(&self.active_class, active)
        {
            web_sys::console::warn_1(&format!("Failed to toggle indicator: {e:?}").into());
        }
    }

    fn set_nav_disabled(&mut self, nav: Nav, disabled: bool) {
        set_disabled(self.nav(nav), disabled);
    }
}

/// Scrolling viewport and buttons of one scroll carousel.
#[derive(Debug, Clone)]
pub struct DomScrollView {
    viewport: Element,
    prev: HtmlElement,
    next: HtmlElement,
}

impl DomScrollView {
    #[must_use]
    pub const fn new(viewport: Element, prev: HtmlElement, next: HtmlElement) -> Self {
        Self {
            viewport,
            prev,
            next,
        }
    }

    #[must_use]
    pub const fn viewport(&self) -> &Element {
        &self.viewport
    }
}

impl ScrollView for DomScrollView {
    fn scroll_by(&mut self, dx: f64) {
        let options = ScrollToOptions::new();
        options.set_left(dx);
        options.set_behavior(ScrollBehavior::Smooth);
        self.viewport.scroll_by_with_scroll_to_options(&options);
    }

    fn set_nav_look(&mut self, nav: Nav, look: ButtonLook, opacity: f64) {
        let button = match nav {
            Nav::Prev => &self.prev,
            Nav::Next => &self.next,
        };
        set_style(button, "opacity", &opacity.to_string());
        set_style(button, "cursor", look.cursor());
    }
}
