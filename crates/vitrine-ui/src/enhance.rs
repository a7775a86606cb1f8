//! Page entry point: attaches every widget the configuration describes
//!
//! Each step runs on its own. A widget whose markup is missing is skipped
//! with a debug line; anything else that fails is logged as a warning and
//! the remaining widgets still attach.

use vitrine_core::Config;
use web_sys::Document;

use crate::dom::{self, EventListener, ResizeHandler, attach_resize_listener};
use crate::error::{Result, UiError};
use crate::widgets::modal::BootstrapModalHost;
use crate::widgets::reveal::RevealObserver;
use crate::widgets::{Attached, ResizeCallback, carousel, modal, placeholder, read_more, reveal};

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "vitrine-config";

/// Everything `enhance_document` installed on the page.
#[derive(Debug, Default)]
pub struct Enhancements {
    carousels: usize,
    placeholders: usize,
    listeners: Vec<EventListener>,
    resize: Option<ResizeHandler>,
    reveal: Option<RevealObserver>,
}

impl Enhancements {
    /// Number of carousel instances that attached.
    #[must_use]
    pub const fn carousel_count(&self) -> usize {
        self.carousels
    }

    /// Number of placeholder images rewritten.
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub const fn has_resize_listener(&self) -> bool {
        self.resize.is_some()
    }

    /// Keeps every handler installed for the lifetime of the page.
    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
        if let Some(resize) = self.resize {
            resize.forget();
        }
        if let Some(reveal) = self.reveal {
            reveal.forget();
        }
    }

    /// Uninstalls every handler.
    ///
    /// # Errors
    ///
    /// Returns the first removal the browser rejects; the rest are still
    /// attempted.
    pub fn remove(self) -> Result<()> {
        if let Some(reveal) = self.reveal {
            reveal.disconnect();
        }
        let resize = self.resize.map(ResizeHandler::remove).transpose();
        let listeners = self
            .listeners
            .into_iter()
            .map(EventListener::remove)
            .fold(Ok(()), |acc, result| acc.and(result));
        resize.map(|_| ()).and(listeners)
    }

    fn absorb(&mut self, attached: Attached, resize_hooks: &mut Vec<ResizeCallback>) {
        self.listeners.extend(attached.listeners);
        resize_hooks.extend(attached.on_resize);
    }
}

fn log_skip(widget: &str, error: &UiError) {
    if error.is_absent_markup() {
        web_sys::console::debug_1(&format!("{widget} skipped: {error}").into());
    } else {
        web_sys::console::warn_1(&format!("{widget} not attached: {error}").into());
    }
}

/// Reads the page's embedded configuration.
///
/// No `#vitrine-config` element means defaults. A malformed or invalid one
/// is logged to the console and also falls back to defaults.
#[must_use]
pub fn load_config(document: &Document) -> Config {
    let Some(source) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return Config::default();
    };

    Config::from_json_str(&source).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Ignoring #{CONFIG_ELEMENT_ID}: {e}").into());
        Config::default()
    })
}

/// Attaches carousels, read-more links, modal dismissal, reveal-on-scroll
/// and placeholder rewriting to the current document.
///
/// All carousels share one debounced resize listener.
///
/// # Errors
///
/// Fails only when there is no usable window or document, or when `config`
/// does not validate. Per-widget failures are logged and skipped.
///
/// # Example
///
/// ```no_run
/// use vitrine_core::Config;
/// use vitrine_ui::enhance_document;
///
/// let enhancements = enhance_document(&Config::default())?;
/// web_sys::console::log_1(&format!("{} carousels", enhancements.carousel_count()).into());
/// enhancements.forget();
/// # Ok::<(), vitrine_ui::error::UiError>(())
/// ```
pub fn enhance_document(config: &Config) -> Result<Enhancements> {
    config.validate()?;
    let document = dom::document()?;

    let mut enhancements = Enhancements::default();
    let mut resize_hooks: Vec<ResizeCallback> = Vec::new();

    match placeholder::rewrite_all(&document, &config.placeholder) {
        Ok(count) => enhancements.placeholders = count,
        Err(e) => log_skip("Placeholder images", &e),
    }

    for carousel_config in &config.carousels {
        let results = match carousel::attach_all(&document, carousel_config) {
            Ok(results) => results,
            Err(e) => {
                log_skip("Carousel", &e);
                continue;
            }
        };
        for result in results {
            match result {
                Ok(attached) => {
                    enhancements.carousels = enhancements.carousels.saturating_add(1);
                    enhancements.absorb(attached, &mut resize_hooks);
                }
                Err(e) => log_skip("Carousel", &e),
            }
        }
    }

    match read_more::attach_all(&document, &config.read_more) {
        Ok(attached) => enhancements.absorb(attached, &mut resize_hooks),
        Err(e) => log_skip("Read more", &e),
    }

    if BootstrapModalHost::is_available() {
        match modal::attach(&document, &config.modal) {
            Ok(attached) => enhancements.absorb(attached, &mut resize_hooks),
            Err(e) => log_skip("Modal dismissal", &e),
        }
    } else {
        web_sys::console::debug_1(&"Modal dismissal skipped: bootstrap is not loaded".into());
    }

    match reveal::attach(&document, &config.reveal) {
        Ok(observer) => enhancements.reveal = observer,
        Err(e) => log_skip("Reveal", &e),
    }

    if !resize_hooks.is_empty() {
        match attach_resize_listener(config.resize_debounce_ms, move |width| {
            resize_hooks.iter().for_each(|hook| hook(width));
        }) {
            Ok(handler) => enhancements.resize = Some(handler),
            Err(e) => log_skip("Resize listener", &e),
        }
    }

    web_sys::console::log_1(
        &format!(
            "Vitrine attached {} carousel(s), {} listener(s)",
            enhancements.carousels,
            enhancements.listeners.len()
        )
        .into(),
    );

    Ok(enhancements)
}
