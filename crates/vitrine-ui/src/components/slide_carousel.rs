//! SlideCarousel component backed by `CarouselState`

use leptos::ev;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use vitrine_core::ResultExt;
use vitrine_core::carousel::CarouselState;
use vitrine_core::config::CarouselConfig;

use crate::dom::current_viewport_width;
use crate::error::{Result, UiError};

/// Default slide width used before layout can be measured.
pub const DEFAULT_SLIDE_WIDTH_PX: f64 = 280.0;

/// One exhibition slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
}

/// Decodes a JSON array of slides.
///
/// # Errors
///
/// Returns `UiError::InvalidSlides` on malformed JSON.
pub fn slides_from_json(json: &str) -> Result<Vec<Slide>> {
    serde_json::from_str(json).map_err(|e| UiError::InvalidSlides(e.to_string()))
}

/// Responsive multi-slide carousel.
///
/// Renders the same class names the server templates use, so one stylesheet
/// serves both. Falls back to a plain strip when the state cannot be built
/// (no slides, or no usable viewport width).
#[component]
pub fn SlideCarousel(
    slides: Vec<Slide>,
    #[prop(default = DEFAULT_SLIDE_WIDTH_PX)] slide_width_px: f64,
    #[prop(optional)] config: Option<CarouselConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_else(CarouselConfig::slides);

    let initial = current_viewport_width()
        .inspect_err(|e| web_sys::console::warn_1(&format!("SlideCarousel: {e}").into()))
        .ok()
        .and_then(|viewport| {
            CarouselState::new(slides.len(), slide_width_px, &config, viewport)
                .into_option_logged("SlideCarousel")
        });

    let state = match initial {
        Some(state) => RwSignal::new(state),
        None => {
            return view! {
                <div class="carousel-container">
                    <div class="carousel-track">
                        {slides.into_iter().map(slide_view).collect_view()}
                    </div>
                </div>
            }
            .into_any();
        }
    };

    let frame = Memo::new(move |_| state.with(CarouselState::frame));

    let handle = window_event_listener(ev::resize, move |_| match current_viewport_width() {
        Ok(width) => state.update(|s| s.resize(width)),
        Err(e) => web_sys::console::warn_1(&format!("Resize ignored: {e}").into()),
    });
    on_cleanup(move || handle.remove());

    let indicators = (0..slides.len())
        .map(|index| {
            let target = i64::try_from(index).unwrap_or(i64::MAX);
            view! {
                <button
                    class="carousel-dot"
                    class:active=move || frame.get().active_indicator == index
                    on:click=move |_| {
                        state.update(|s| {
                            s.go_to(target);
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="carousel-container">
            <button
                class="carousel-arrow prev"
                prop:disabled=move || frame.get().prev_disabled
                on:click=move |_| {
                    state.update(|s| {
                        s.previous();
                    });
                }
            >
                "‹"
            </button>
            <div class="carousel-viewport">
                <div class="carousel-track" style:transform=move || frame.get().transform()>
                    {slides.into_iter().map(slide_view).collect_view()}
                </div>
            </div>
            <button
                class="carousel-arrow next"
                prop:disabled=move || frame.get().next_disabled
                on:click=move |_| {
                    state.update(|s| {
                        s.next();
                    });
                }
            >
                "›"
            </button>
            <div class="carousel-dots">{indicators}</div>
        </div>
    }
    .into_any()
}

fn slide_view(slide: Slide) -> impl IntoView {
    let alt = slide.caption.clone();
    view! {
        <div class="carousel-slide">
            <img src=slide.image_url alt=alt />
            <p class="carousel-caption">{slide.caption}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_from_json() -> std::result::Result<(), String> {
        let slides = slides_from_json(
            r#"[{"image_url": "/media/vase.jpg", "caption": "Vase"}, {"image_url": "/media/mask.jpg"}]"#,
        )
        .map_err(|e| e.to_string())?;

        assert_eq!(slides.len(), 2);
        assert_eq!(
            slides.first(),
            Some(&Slide {
                image_url: "/media/vase.jpg".to_string(),
                caption: "Vase".to_string(),
            })
        );
        assert_eq!(slides.get(1).map(|s| s.caption.as_str()), Some(""));
        Ok(())
    }

    #[test]
    fn test_slides_from_json_rejects_garbage() {
        let result = slides_from_json("{\"image_url\": 3}");
        assert!(matches!(result, Err(UiError::InvalidSlides(_))));
    }
}
