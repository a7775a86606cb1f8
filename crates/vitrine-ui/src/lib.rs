//! Browser bindings for the Vitrine exhibition widgets
//!
//! This crate attaches the `vitrine-core` state machines to a live page.
//!
//! ## Architecture
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Server-rendered pages are enhanced in place by [`enhance_document`]
//! - Pages rendered in Rust use the Leptos 0.7 CSR components instead
//!
//! ## Module Structure
//! - `dom`: panic-free `web-sys` helpers, listeners, resize and view adapters
//! - `widgets`: one attach step per widget kind
//! - `components`: Leptos components over the same core models
//! - `enhance`: the page entry point and embedded configuration loading
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod components;
pub mod dom;
pub mod enhance;
pub mod error;
pub mod widgets;

pub use enhance::{CONFIG_ELEMENT_ID, Enhancements, enhance_document, load_config};
pub use error::UiError;
