//! Widget attachment: binds core controllers to server-rendered markup
//!
//! Each `attach_*` function enhances one subtree and returns an [`Attached`]
//! holding its listeners. Absent markup surfaces as an error that
//! [`crate::enhance`] skips quietly.

pub mod carousel;
pub mod modal;
pub mod placeholder;
pub mod read_more;
pub mod reveal;

use vitrine_core::breakpoints::ViewportWidth;

use crate::dom::EventListener;

/// Callback fed the new viewport width after a debounced resize.
pub type ResizeCallback = Box<dyn Fn(ViewportWidth)>;

/// Listeners and resize hook of one enhanced widget.
#[derive(Default)]
pub struct Attached {
    pub listeners: Vec<EventListener>,
    pub on_resize: Option<ResizeCallback>,
}

impl Attached {
    #[must_use]
    pub fn with_listeners(listeners: Vec<EventListener>) -> Self {
        Self {
            listeners,
            on_resize: None,
        }
    }
}

impl std::fmt::Debug for Attached {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attached")
            .field("listeners", &self.listeners.len())
            .field("on_resize", &self.on_resize.is_some())
            .finish()
    }
}
