//! Owned DOM event listener registration

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::{Result, UiError};

/// A registered listener. Keeps its closure alive until removed or forgotten.
///
/// Dropping the handle without calling [`EventListener::forget`] frees the
/// closure while the DOM still references it; later events would then throw
/// inside the browser.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Registers `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Js` if the browser rejects the registration.
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| UiError::js(&e))?;

        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }

    /// Unregisters the listener and frees the closure.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Js` if the browser rejects the removal.
    pub fn remove(self) -> Result<()> {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .map_err(|e| UiError::js(&e))
    }

    /// Leaves the listener installed for the lifetime of the page.
    pub fn forget(self) {
        self.closure.forget();
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// Listeners registered together by one widget.
///
/// A failed registration unregisters the ones already in the group, so a
/// half-attached widget never leaves handlers behind on the page.
#[derive(Debug, Default)]
pub struct ListenerGroup {
    listeners: Vec<EventListener>,
}

impl ListenerGroup {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            listeners: Vec::with_capacity(capacity),
        }
    }

    /// Registers `handler` like [`EventListener::listen`].
    ///
    /// # Errors
    ///
    /// Returns the registration error after removing every listener already
    /// in the group.
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        match EventListener::listen(target, event, handler) {
            Ok(listener) => {
                self.listeners.push(listener);
                Ok(())
            }
            Err(e) => {
                self.unregister_all();
                Err(e)
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    #[must_use]
    pub fn into_listeners(self) -> Vec<EventListener> {
        self.listeners
    }

    fn unregister_all(&mut self) {
        for listener in self.listeners.drain(..) {
            let event = listener.event();
            if let Err(e) = listener.remove() {
                web_sys::console::warn_1(&format!("Could not remove {event} listener: {e}").into());
            }
        }
    }
}
