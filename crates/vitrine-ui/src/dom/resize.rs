//! Window resize handling for responsive widgets
//!
//! One debounced listener per page feeds the current viewport width to every
//! registered widget, so a drag-resize produces one recompute per burst.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use vitrine_core::breakpoints::ViewportWidth;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::{Result, UiError};

/// Reads `window.innerWidth` as a validated [`ViewportWidth`].
///
/// # Errors
///
/// - `UiError::Js` when the browser throws or reports a non-number
/// - `Error::InvalidViewportWidth` (wrapped) for negative or non-finite widths
///
/// # Example
///
/// ```no_run
/// use vitrine_ui::dom::{viewport_width, window};
///
/// let width = viewport_width(&window()?)?;
/// assert!(width.value() >= 0.0);
/// # Ok::<(), vitrine_ui::error::UiError>(())
/// ```
pub fn viewport_width(window: &Window) -> Result<ViewportWidth> {
    let raw = window
        .inner_width()
        .map_err(|e| UiError::js(&e))?;
    let width = raw
        .as_f64()
        .ok_or_else(|| UiError::Js(format!("innerWidth is not a number: {raw:?}")))?;

    Ok(ViewportWidth::new(width)?)
}

/// The installed page-wide resize listener.
pub struct ResizeHandler {
    window: Window,
    on_event: Closure<dyn FnMut()>,
}

impl ResizeHandler {
    /// Detaches the listener. A timer already pending still fires once.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Js` if the browser rejects the removal.
    pub fn remove(self) -> Result<()> {
        self.window
            .remove_event_listener_with_callback("resize", self.on_event.as_ref().unchecked_ref())
            .map_err(|e| UiError::js(&e))
    }

    /// Keep the listener for the lifetime of the page.
    pub fn forget(self) {
        self.on_event.forget();
    }
}

impl std::fmt::Debug for ResizeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeHandler").finish_non_exhaustive()
    }
}

/// Calls `on_resize` once per burst of window resizes.
///
/// Every event restarts a `debounce_ms` timer. When it fires, `on_resize`
/// receives the viewport width read at that moment. Unusable widths are
/// dropped with a console warning.
///
/// # Errors
///
/// `UiError::NoWindow` outside a browser, or `UiError::Js` if the listener
/// cannot be registered.
///
/// # Example
///
/// ```no_run
/// use vitrine_ui::dom::attach_resize_listener;
///
/// let handler = attach_resize_listener(100, |width| {
///     web_sys::console::log_1(&format!("viewport is {}px", width.value()).into());
/// })?;
/// handler.remove()?;
/// # Ok::<(), vitrine_ui::error::UiError>(())
/// ```
pub fn attach_resize_listener<F>(debounce_ms: u32, on_resize: F) -> Result<ResizeHandler>
where
    F: Fn(ViewportWidth) + 'static,
{
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let on_resize = Rc::new(on_resize);

    let source = window.clone();
    let on_event = Closure::wrap(Box::new(move || {
        // Dropping a gloo Timeout cancels it
        pending.borrow_mut().take();

        let source = source.clone();
        let on_resize = Rc::clone(&on_resize);
        let slot = Rc::clone(&pending);
        let timer = Timeout::new(debounce_ms, move || {
            slot.borrow_mut().take();
            match viewport_width(&source) {
                Ok(width) => on_resize(width),
                Err(e) => web_sys::console::warn_1(&format!("Resize ignored: {e}").into()),
            }
        });
        *pending.borrow_mut() = Some(timer);
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("resize", on_event.as_ref().unchecked_ref())
        .map_err(|e| UiError::js(&e))?;

    Ok(ResizeHandler { window, on_event })
}
