//! Browser tests for the Leptos components
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox crates/vitrine-ui

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use vitrine_ui::components::{ReadMoreText, Slide, SlideCarousel};
use vitrine_ui::dom::{self, query_all_within, query_within};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Fresh empty `<div>` on `<body>` to mount into.
fn mount_point() -> Result<HtmlElement, String> {
    let document = dom::document().map_err(|e| e.to_string())?;
    let body = document.body().ok_or("No body")?;
    let point = document
        .create_element("div")
        .map_err(|e| format!("Failed to create mount point: {e:?}"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "mount point is not an HtmlElement".to_string())?;
    body.append_child(&point)
        .map_err(|e| format!("Failed to append mount point: {e:?}"))?;
    Ok(point)
}

fn html(root: &Element, selector: &str) -> Result<HtmlElement, String> {
    query_within(root, selector)
        .map_err(|e| e.to_string())?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("{selector} is not an HtmlElement"))
}

fn style_of(root: &Element, selector: &str, property: &str) -> Result<String, String> {
    html(root, selector)?
        .style()
        .get_property_value(property)
        .map_err(|e| format!("{e:?}"))
}

fn is_disabled(root: &Element, selector: &str) -> Result<bool, String> {
    Ok(html(root, selector)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| format!("{selector} is not a button"))?
        .disabled())
}

/// Lets the reactive system flush pending effects.
async fn settle() {
    TimeoutFuture::new(10).await;
}

fn gallery(count: usize) -> Vec<Slide> {
    (0..count)
        .map(|i| Slide {
            image_url: format!("/media/object-{i}.jpg"),
            caption: format!("Object {i}"),
        })
        .collect()
}

async fn slide_carousel_walkthrough() -> Result<(), String> {
    let point = mount_point()?;
    let mounted = leptos::mount::mount_to(point.clone(), || {
        view! { <SlideCarousel slides=gallery(5) /> }
    });
    settle().await;

    assert_eq!(
        query_all_within(&point, ".carousel-slide").map_err(|e| e.to_string())?.len(),
        5
    );
    assert_eq!(
        style_of(&point, ".carousel-track", "transform")?,
        "translateX(0px)"
    );
    assert!(is_disabled(&point, ".carousel-arrow.prev")?);
    assert!(!is_disabled(&point, ".carousel-arrow.next")?);

    html(&point, ".carousel-arrow.next")?.click();
    settle().await;

    // Default slide width 280px plus the 20px gap
    assert_eq!(
        style_of(&point, ".carousel-track", "transform")?,
        "translateX(-300px)"
    );
    assert!(!is_disabled(&point, ".carousel-arrow.prev")?);
    let active: Vec<bool> = query_all_within(&point, ".carousel-dot")
        .map_err(|e| e.to_string())?
        .iter()
        .map(|dot| dot.class_list().contains("active"))
        .collect();
    assert_eq!(active, vec![false, true, false, false, false]);

    html(&point, ".carousel-dot:nth-child(1)")?.click();
    settle().await;
    assert_eq!(
        style_of(&point, ".carousel-track", "transform")?,
        "translateX(0px)"
    );

    drop(mounted);
    point.remove();
    Ok(())
}

#[wasm_bindgen_test]
async fn test_slide_carousel_component_navigates() {
    let result = slide_carousel_walkthrough().await;
    assert!(result.is_ok(), "{result:?}");
}

async fn empty_carousel_walkthrough() -> Result<(), String> {
    let point = mount_point()?;
    let mounted = leptos::mount::mount_to(point.clone(), || {
        view! { <SlideCarousel slides=Vec::new() /> }
    });
    settle().await;

    assert!(query_within(&point, ".carousel-track").is_ok());
    assert!(query_within(&point, ".carousel-arrow.next").is_err());

    drop(mounted);
    point.remove();
    Ok(())
}

#[wasm_bindgen_test]
async fn test_slide_carousel_component_without_slides_renders_plain_strip() {
    let result = empty_carousel_walkthrough().await;
    assert!(result.is_ok(), "{result:?}");
}

async fn read_more_text_walkthrough() -> Result<(), String> {
    let point = mount_point()?;
    let mounted = leptos::mount::mount_to(point.clone(), || {
        view! { <ReadMoreText short="A bronze" full="A bronze ritual vessel." /> }
    });
    settle().await;

    let link = html(&point, ".read-more-link")?;
    assert_eq!(link.text_content().as_deref(), Some("... read more"));
    assert_eq!(style_of(&point, ".full-text", "display")?, "none");
    assert_eq!(style_of(&point, ".short-text", "display")?, "inline");

    link.click();
    settle().await;
    assert_eq!(link.text_content().as_deref(), Some("read less"));
    assert_eq!(style_of(&point, ".full-text", "display")?, "inline");
    assert_eq!(style_of(&point, ".short-text", "display")?, "none");

    link.click();
    settle().await;
    assert_eq!(link.text_content().as_deref(), Some("... read more"));
    assert_eq!(style_of(&point, ".full-text", "display")?, "none");

    drop(mounted);
    point.remove();
    Ok(())
}

#[wasm_bindgen_test]
async fn test_read_more_text_component_toggles() {
    let result = read_more_text_walkthrough().await;
    assert!(result.is_ok(), "{result:?}");
}
