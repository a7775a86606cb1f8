//! Swaps template placeholder images for real ones at load

use vitrine_core::config::PlaceholderConfig;
use vitrine_core::placeholder::rewrite;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use crate::dom::query_all;
use crate::error::Result;

/// Rewrites every `<img>` whose `src` attribute starts with the configured
/// prefix. Returns how many images changed.
///
/// The attribute is read rather than `img.src`, which the browser has
/// already resolved to an absolute URL.
///
/// # Errors
///
/// Returns `UiError::Js` if the prefix produces an invalid selector.
pub fn rewrite_all(document: &Document, config: &PlaceholderConfig) -> Result<usize> {
    let selector = format!("img[src^=\"{}\"]", config.prefix);
    let images = query_all(document, &selector)?;

    let rewritten = images
        .iter()
        .filter_map(|element| element.dyn_ref::<HtmlImageElement>())
        .filter_map(|image| {
            let src = image.get_attribute("src")?;
            let replacement = rewrite(&src, &image.alt(), nonce(), config)?;
            image.set_src(&replacement.src);
            image.set_alt(&replacement.alt);
            Some(())
        })
        .count();

    Ok(rewritten)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn nonce() -> u32 {
    // Math.random() is in [0, 1), so the product stays below u32::MAX
    (js_sys::Math::random() * f64::from(u32::MAX)) as u32
}
