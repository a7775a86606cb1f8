//! WASM entry point for server-rendered exhibition pages
//!
//! Trunk compiles this to WASM. It reads the page's embedded configuration
//! and enhances the document in place.

use vitrine_ui::{dom, enhance_document, load_config};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let config = match dom::document() {
        Ok(document) => load_config(&document),
        Err(e) => {
            web_sys::console::error_1(&format!("Vitrine not started: {e}").into());
            return;
        }
    };

    match enhance_document(&config) {
        Ok(enhancements) => enhancements.forget(),
        Err(e) => web_sys::console::error_1(&format!("Vitrine not started: {e}").into()),
    }
}
