//! Carousel attachment for both advance modes
//!
//! The controller is shared between the instance's own closures through
//! `Rc<RefCell<_>>`; nothing outside the instance can reach it.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::breakpoints::ViewportWidth;
use vitrine_core::carousel::{Carousel, Nav, ScrollCarousel, ScrollMetrics};
use vitrine_core::config::{Advance, CarouselConfig};
use vitrine_core::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::Attached;
use crate::dom::{
    DomCarouselView, DomScrollView, ListenerGroup, current_viewport_width, query_all,
    query_all_within, query_html_within, query_within,
};
use crate::error::Result;

/// Slide mode: translate the track, sync indicators, follow breakpoints.
///
/// # Errors
///
/// Returns `Error::EmptyCarousel`/`Error::MissingMarkup` (wrapped) when the
/// container lacks required parts, or a DOM error. Listeners registered
/// before a failure are removed again.
pub fn attach_slides(
    container: &Element,
    config: &CarouselConfig,
    viewport: ViewportWidth,
) -> Result<Attached> {
    let markers = &config.markers;

    let slides = query_all_within(container, &markers.slide)?;
    let first_width = slides
        .first()
        .ok_or(Error::EmptyCarousel)?
        .get_bounding_client_rect()
        .width();

    let track = query_html_within(container, &markers.track)?;
    let prev = query_within(container, &markers.prev)?;
    let next = query_within(container, &markers.next)?;
    let indicators = match &markers.indicator {
        Some(selector) => query_all_within(container, selector)?,
        None => Vec::new(),
    };

    let view = DomCarouselView::new(
        track,
        indicators.clone(),
        prev.clone(),
        next.clone(),
        markers.active_class.clone(),
    );
    let carousel = Rc::new(RefCell::new(Carousel::mount(
        slides.len(),
        first_width,
        view,
        config,
        viewport,
    )?));

    let mut listeners = ListenerGroup::with_capacity(indicators.len().saturating_add(2));
    for (nav, button) in [(Nav::Prev, &prev), (Nav::Next, &next)] {
        let carousel = carousel.clone();
        listeners.listen(button, "click", move |_| {
            if let Ok(mut carousel) = carousel.try_borrow_mut() {
                carousel.navigate(nav);
            }
        })?;
    }

    for (index, indicator) in indicators.iter().enumerate() {
        let carousel = carousel.clone();
        let target = i64::try_from(index).unwrap_or(i64::MAX);
        listeners.listen(indicator, "click", move |_| {
            if let Ok(mut carousel) = carousel.try_borrow_mut() {
                carousel.go_to(target);
            }
        })?;
    }

    let on_resize = Box::new(move |width: ViewportWidth| {
        if let Ok(mut carousel) = carousel.try_borrow_mut() {
            carousel.on_resize(width);
        }
    });

    Ok(Attached {
        listeners: listeners.into_listeners(),
        on_resize: Some(on_resize),
    })
}

/// Pixel mode: scroll the viewport by one item and dim buttons at the ends.
///
/// # Errors
///
/// See [`attach_slides`].
pub fn attach_pixels(container: &Element, config: &CarouselConfig) -> Result<Attached> {
    let markers = &config.markers;

    let items = query_all_within(container, &markers.slide)?;
    let first_item = items.first().ok_or(Error::EmptyCarousel)?;
    let item_width = first_item.dyn_ref::<HtmlElement>().map_or_else(
        || first_item.get_bounding_client_rect().width(),
        |item| f64::from(item.offset_width()),
    );

    let viewport_selector = markers
        .viewport
        .as_deref()
        .ok_or_else(|| Error::missing_markup("viewport marker"))?;
    let viewport = query_within(container, viewport_selector)?;
    let track = query_within(container, &markers.track)?;
    let prev = query_html_within(container, &markers.prev)?;
    let next = query_html_within(container, &markers.next)?;

    let view = DomScrollView::new(viewport.clone(), prev.clone(), next.clone());
    let carousel = Rc::new(RefCell::new(ScrollCarousel::mount(
        items.len(),
        item_width,
        view,
        config,
        metrics(&viewport, &track),
    )?));

    let mut listeners = ListenerGroup::with_capacity(3);
    for (nav, button) in [(Nav::Prev, &prev), (Nav::Next, &next)] {
        let carousel = carousel.clone();
        listeners.listen(button, "click", move |_| {
            if let Ok(mut carousel) = carousel.try_borrow_mut() {
                carousel.navigate(nav);
            }
        })?;
    }

    let scroll_source = viewport.clone();
    listeners.listen(&viewport, "scroll", move |_| {
        if let Ok(mut carousel) = carousel.try_borrow_mut() {
            carousel.on_scroll(metrics(&scroll_source, &track));
        }
    })?;

    Ok(Attached::with_listeners(listeners.into_listeners()))
}

fn metrics(viewport: &Element, track: &Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: f64::from(viewport.scroll_left()),
        scroll_width: f64::from(track.scroll_width()),
        client_width: f64::from(viewport.client_width()),
    }
}

/// Attaches every container matching the config's marker. Each container
/// gets its own result so one broken instance leaves the others working.
///
/// The viewport width is read only for slide mode, and only when the page
/// has at least one container.
///
/// # Errors
///
/// An invalid container selector fails the whole call, as does an
/// unreadable viewport width in slide mode.
pub fn attach_all(document: &Document, config: &CarouselConfig) -> Result<Vec<Result<Attached>>> {
    let containers = query_all(document, &config.markers.container)?;
    if containers.is_empty() {
        return Ok(Vec::new());
    }

    Ok(match config.advance {
        Advance::Slides => {
            let viewport = current_viewport_width()?;
            containers
                .iter()
                .map(|container| attach_slides(container, config, viewport))
                .collect()
        }
        Advance::Pixels => containers
            .iter()
            .map(|container| attach_pixels(container, config))
            .collect(),
    })
}
