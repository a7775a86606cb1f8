//! ReadMoreText component: a description with an expand/collapse link

use leptos::prelude::*;
use vitrine_core::config::ReadMoreConfig;
use vitrine_core::read_more::ReadMore;

#[component]
pub fn ReadMoreText(
    #[prop(into)] short: String,
    #[prop(into)] full: String,
    #[prop(optional)] config: Option<ReadMoreConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = RwSignal::new(ReadMore::new(&config));
    let frame = Memo::new(move |_| state.with(ReadMore::frame));

    view! {
        <p class="description-text">
            <span class="short-text" style:display=move || frame.get().short_display>
                {short}
            </span>
            <span class="full-text" style:display=move || frame.get().full_display>
                {full}
            </span>
            " "
            <a
                href="#"
                class="read-more-link"
                on:click=move |ev| {
                    ev.prevent_default();
                    state.update(|s| {
                        s.toggle();
                    });
                }
            >
                {move || frame.get().label}
            </a>
        </p>
    }
}
