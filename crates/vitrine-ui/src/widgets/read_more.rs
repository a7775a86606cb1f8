//! Read-more links on truncated descriptions

use vitrine_core::Error;
use vitrine_core::config::ReadMoreConfig;
use vitrine_core::read_more::{ReadMore, ReadMoreFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use super::Attached;
use crate::dom::{ListenerGroup, query_all, query_html_within, set_style};
use crate::error::{Result, UiError};

/// Binds every read-more link in the document and sets each link to the
/// collapsed label.
///
/// Links outside a description, or whose description lacks either span,
/// are skipped with a debug line.
///
/// # Errors
///
/// Returns `UiError::Js` for an invalid link selector or a rejected
/// registration. Links bound before a rejected registration are unbound.
pub fn attach_all(document: &Document, config: &ReadMoreConfig) -> Result<Attached> {
    let links = query_all(document, &config.link)?;

    let mut listeners = ListenerGroup::with_capacity(links.len());
    for link in &links {
        if let Err(e) = description_parts(link, config) {
            web_sys::console::debug_1(&format!("Read more link skipped: {e}").into());
            continue;
        }

        let config = config.clone();
        let mut state = ReadMore::new(&config);
        link.set_text_content(Some(state.label()));
        listeners.listen(link, "click", move |event: Event| {
            event.prevent_default();
            if let Err(e) = on_click(&event, &config, &mut state) {
                web_sys::console::warn_1(&format!("Read more toggle skipped: {e}").into());
            }
        })?;
    }

    Ok(Attached::with_listeners(listeners.into_listeners()))
}

fn on_click(event: &Event, config: &ReadMoreConfig, state: &mut ReadMore) -> Result<()> {
    let link = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| UiError::wrong_type(config.link.as_str(), "HtmlElement"))?;

    let (short, full) = description_parts(&link, config)?;

    let display = full.style().get_property_value("display").unwrap_or_default();
    state.sync_from_display(&display);
    draw(&state.toggle(), &short, &full, &link);
    Ok(())
}

/// Short and full spans of the description holding `link`.
fn description_parts(
    link: &Element,
    config: &ReadMoreConfig,
) -> Result<(HtmlElement, HtmlElement)> {
    let container = link
        .closest(&config.container)
        .map_err(|e| UiError::js(&e))?
        .ok_or_else(|| Error::missing_markup(config.container.as_str()))?;

    Ok((
        query_html_within(&container, &config.short_text)?,
        query_html_within(&container, &config.full_text)?,
    ))
}

fn draw(frame: &ReadMoreFrame, short: &HtmlElement, full: &HtmlElement, link: &Element) {
    set_style(short, "display", frame.short_display);
    set_style(full, "display", frame.full_display);
    link.set_text_content(Some(&frame.label));
}
