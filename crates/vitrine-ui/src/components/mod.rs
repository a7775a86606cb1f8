//! Leptos components for pages rendered in Rust
//!
//! These reuse the core state machines directly; the DOM bindings in
//! [`crate::widgets`] serve server-rendered markup instead.

pub mod read_more_text;
pub mod slide_carousel;

pub use read_more_text::ReadMoreText;
pub use slide_carousel::{Slide, SlideCarousel, slides_from_json};
