//! Fade-in on first scroll into view

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use vitrine_core::config::RevealConfig;
use vitrine_core::reveal::{IntersectionEntry, RevealTracker};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom::{query_all, set_style};
use crate::error::{Result, UiError};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live observer over the page's reveal targets.
pub struct RevealObserver {
    observer: IntersectionObserver,
    closure: ObserverCallback,
}

impl RevealObserver {
    /// Stops observing and frees the callback.
    pub fn disconnect(self) {
        self.observer.disconnect();
        drop(self.closure);
    }

    /// Keeps observing for the lifetime of the page.
    pub fn forget(self) {
        self.closure.forget();
    }
}

impl std::fmt::Debug for RevealObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealObserver").finish_non_exhaustive()
    }
}

/// Observes every element matching `config.selector`.
///
/// Returns `None` when the page has no such element.
///
/// # Errors
///
/// Returns `UiError::Js` if the selector is invalid or the browser refuses
/// to create the observer.
pub fn attach(document: &Document, config: &RevealConfig) -> Result<Option<RevealObserver>> {
    let targets = query_all(document, &config.selector)?;
    if targets.is_empty() {
        return Ok(None);
    }

    let mut tracker = RevealTracker::new();
    for id in 0..targets.len() {
        tracker.observe(id);
    }
    let tracker = Rc::new(RefCell::new(tracker));
    let watched = Rc::new(targets.clone());

    let closure: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let id = watched.iter().position(|element| *element == target)?;
                    Some(IntersectionEntry {
                        id,
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();

            let Ok(mut tracker) = tracker.try_borrow_mut() else {
                return;
            };
            let revealed = tracker.on_entries(entries);

            for id in revealed {
                let Some(element) = watched.get(id) else {
                    continue;
                };
                if let Some(element) = element.dyn_ref::<HtmlElement>() {
                    set_style(element, "animation-play-state", "running");
                }
                observer.unobserve(element);
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(|e| UiError::js(&e))?;

    for target in &targets {
        observer.observe(target);
    }

    Ok(Some(RevealObserver { observer, closure }))
}
