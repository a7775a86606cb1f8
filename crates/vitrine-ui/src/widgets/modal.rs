//! Modal dismissal over the page's Bootstrap modal component
//!
//! The component is reached through `js_sys::Reflect` on `window.bootstrap`,
//! so the crate carries no binding to the framework itself.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use vitrine_core::config::ModalConfig;
use vitrine_core::modal::{Dismissal, ModalController, ModalHost};
use vitrine_core::{Error, Result as CoreResult};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, KeyboardEvent};

use super::Attached;
use crate::dom::{ListenerGroup, document, window};
use crate::error::{Result, UiError};

fn host_error(value: &JsValue) -> Error {
    Error::modal_host_failed(format!("{value:?}"))
}

fn method(target: &JsValue, name: &str) -> CoreResult<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| host_error(&e))?
        .dyn_into::<Function>()
        .map_err(|_| Error::modal_host_failed(format!("{name} is not a function")))
}

/// `ModalHost` backed by `bootstrap.Modal`.
#[derive(Debug, Clone)]
pub struct BootstrapModalHost {
    document: Document,
    modal: Function,
    open_selector: String,
}

impl BootstrapModalHost {
    /// Looks up `window.bootstrap.Modal`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModalHostFailed` (wrapped) when the framework is not
    /// loaded, or a DOM error when there is no window.
    pub fn from_window(config: &ModalConfig) -> Result<Self> {
        let window = window()?;
        let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap"))
            .map_err(|e| UiError::from(host_error(&e)))?;
        if bootstrap.is_undefined() || bootstrap.is_null() {
            return Err(Error::modal_host_failed("bootstrap is not loaded").into());
        }
        let modal = method(&bootstrap, "Modal")?;

        Ok(Self {
            document: document()?,
            modal,
            open_selector: config.open_selector.clone(),
        })
    }

    /// Whether `window.bootstrap.Modal` can be used on this page.
    #[must_use]
    pub fn is_available() -> bool {
        Self::from_window(&ModalConfig::default()).is_ok()
    }

    fn element(&self, id: &str) -> CoreResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| Error::modal_not_found(id))
    }

    /// Hides the instance Bootstrap keeps for `element`.
    fn hide_element(&self, element: &Element, label: &str) -> CoreResult<()> {
        let instance = method(&self.modal, "getInstance")?
            .call1(&self.modal, element)
            .map_err(|e| host_error(&e))?;
        if instance.is_null() || instance.is_undefined() {
            return Err(Error::modal_not_found(label));
        }
        method(&instance, "hide")?
            .call0(&instance)
            .map(|_| ())
            .map_err(|e| host_error(&e))
    }
}

/// Name of a modal element for log lines; dialogs without an id are
/// described by their class list.
fn describe(element: &Element) -> String {
    let id = element.id();
    if id.is_empty() {
        format!("<{}>", element.class_name())
    } else {
        id
    }
}

impl ModalHost for BootstrapModalHost {
    type Handle = Element;

    fn show(&mut self, id: &str) -> CoreResult<()> {
        let element = self.element(id)?;
        let instance =
            Reflect::construct(&self.modal, &Array::of1(&element)).map_err(|e| host_error(&e))?;
        method(&instance, "show")?
            .call0(&instance)
            .map(|_| ())
            .map_err(|e| host_error(&e))
    }

    fn hide(&mut self, id: &str) -> CoreResult<()> {
        let element = self.element(id)?;
        self.hide_element(&element, id)
    }

    fn active_modal(&self) -> Option<Element> {
        self.document
            .query_selector(&self.open_selector)
            .ok()
            .flatten()
    }

    fn dismiss(&mut self, handle: &Element) -> CoreResult<()> {
        self.hide_element(handle, &describe(handle))
    }
}

fn log_dismissal(result: CoreResult<Dismissal<Element>>) {
    match result {
        Ok(Dismissal::Hidden(element)) => {
            web_sys::console::debug_1(&format!("Modal {} dismissed", describe(&element)).into());
        }
        Ok(Dismissal::Ignored) => {}
        Err(e) => web_sys::console::warn_1(&format!("Modal dismissal failed: {e}").into()),
    }
}

/// Installs the Escape and backdrop-click handlers on the document.
///
/// # Errors
///
/// Returns `Error::ModalHostFailed` (wrapped) when Bootstrap is absent; the
/// caller treats that as "nothing to enhance".
pub fn attach(document: &Document, config: &ModalConfig) -> Result<Attached> {
    let host = BootstrapModalHost::from_window(config)?;
    let controller = Rc::new(RefCell::new(ModalController::new(host, config)));

    let mut listeners = ListenerGroup::with_capacity(2);
    let on_key = controller.clone();
    listeners.listen(document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Ok(mut controller) = on_key.try_borrow_mut() {
            log_dismissal(controller.on_key(&event.key()));
        }
    })?;

    let backdrop_class = config.backdrop_class.clone();
    listeners.listen(document, "click", move |event: Event| {
        let on_backdrop = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .is_some_and(|target| target.class_list().contains(&backdrop_class));
        if let Ok(mut controller) = controller.try_borrow_mut() {
            log_dismissal(controller.on_click(on_backdrop));
        }
    })?;

    Ok(Attached::with_listeners(listeners.into_listeners()))
}

fn controller() -> Result<ModalController<BootstrapModalHost>> {
    let config = ModalConfig::default();
    Ok(ModalController::new(
        BootstrapModalHost::from_window(&config)?,
        &config,
    ))
}

/// Opens the modal with the given element id. Exported for inline
/// `onclick` handlers in the page templates.
///
/// # Errors
///
/// Throws when Bootstrap is absent or the id is unknown.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(modal_id: &str) -> std::result::Result<(), JsValue> {
    controller()?.open(modal_id).map_err(UiError::from)?;
    Ok(())
}

/// Closes the modal with the given element id.
///
/// # Errors
///
/// Throws when Bootstrap is absent or the modal was never opened.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(modal_id: &str) -> std::result::Result<(), JsValue> {
    controller()?.close(modal_id).map_err(UiError::from)?;
    Ok(())
}
