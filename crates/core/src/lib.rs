//! Core widget state machines for Vitrine exhibition pages
//!
//! Everything here is plain Rust with no browser dependency: the DOM binding
//! lives in `vitrine-ui`. Controllers talk to the page through small view
//! traits, which keeps every transition unit-testable.
//!
//! ## Module Structure
//! - `breakpoints`: viewport width to visible slide count
//! - `carousel`: discrete slide carousel and continuous scroll carousel
//! - `read_more`: truncated description toggle
//! - `modal`: modal dismissal over a host capability
//! - `reveal`: one-shot reveal of elements entering the viewport
//! - `placeholder`: placeholder image URL rewriting
//! - `config`: serde configuration with page-script defaults
//! - `error` / `result`: error taxonomy and Railway-Oriented helpers

#![forbid(unsafe_code)]

pub mod breakpoints;
pub mod carousel;
pub mod config;
pub mod error;
pub mod modal;
pub mod placeholder;
pub mod read_more;
pub mod result;
pub mod reveal;

pub use config::Config;
pub use error::Error;
pub use result::{Result, ResultExt};
