//! Thin, panic-free helpers over `web-sys`
//!
//! Everything that touches the live document goes through here or through
//! the view adapters, so widget code reads as plain Result plumbing.

pub mod listener;
pub mod resize;
pub mod views;

use vitrine_core::Error;
use vitrine_core::breakpoints::ViewportWidth;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::{Result, UiError};

pub use listener::{EventListener, ListenerGroup};
pub use resize::{ResizeHandler, attach_resize_listener, viewport_width};
pub use views::{DomCarouselView, DomScrollView};

/// # Errors
///
/// Returns `UiError::NoWindow` outside a browser context.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// # Errors
///
/// Returns `UiError::NoWindow` or `UiError::NoDocument`.
pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// First descendant of `root` matching `selector`.
///
/// # Errors
///
/// Returns `Error::MissingMarkup` when nothing matches, or `UiError::Js` for
/// an invalid selector.
pub fn query_within(root: &Element, selector: &str) -> Result<Element> {
    root.query_selector(selector)
        .map_err(|e| UiError::js(&e))?
        .ok_or_else(|| Error::missing_markup(selector).into())
}

/// Like [`query_within`], cast to `HtmlElement` for style access.
///
/// # Errors
///
/// Same as [`query_within`], plus `UiError::WrongElementType`.
pub fn query_html_within(root: &Element, selector: &str) -> Result<HtmlElement> {
    query_within(root, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::wrong_type(selector, "HtmlElement"))
}

/// All descendants of `root` matching `selector`, in document order.
///
/// # Errors
///
/// Returns `UiError::Js` for an invalid selector.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|e| UiError::js(&e))
}

/// All elements in `document` matching `selector`, in document order.
///
/// # Errors
///
/// Returns `UiError::Js` for an invalid selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|e| UiError::js(&e))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current viewport width, already validated.
///
/// # Errors
///
/// Returns an error when no window exists or `innerWidth` is unusable.
pub fn current_viewport_width() -> Result<ViewportWidth> {
    viewport_width(&window()?)
}

/// Sets one inline style property, ignoring engines that reject it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        web_sys::console::warn_1(&format!("Failed to set {property}: {e:?}").into());
    }
}
