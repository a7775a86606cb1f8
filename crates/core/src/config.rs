//! Widget configuration
//!
//! Every default reproduces the markup contract of the exhibition templates,
//! so an empty document (`{}` or an empty TOML file) yields a working setup.
//!
//! # Example
//!
//! ```
//! use vitrine_core::config::{Advance, Config};
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     resize_debounce_ms = 50
//!
//!     [[carousels]]
//!     advance = "pixels"
//!     "#,
//! )?;
//! let strip = &config.carousels[0];
//! assert_eq!(strip.advance, Advance::Pixels);
//! assert_eq!(strip.gap_px, 15.0);
//! assert_eq!(strip.markers.viewport.as_deref(), Some(".explore-carousel-container"));
//! # Ok::<(), vitrine_core::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::breakpoints::BreakpointTable;
use crate::error::Error;
use crate::result::Result;

/// How a carousel moves when a navigation control is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advance {
    /// Move a whole slide and translate the track (indicators, breakpoints)
    #[default]
    Slides,
    /// Scroll the viewport by one item width plus gap
    Pixels,
}

/// What happens to the current index when a resize shrinks the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Re-clamp the index to the new bound before rendering
    #[default]
    Clamp,
    /// Keep the index; only the disabled flags reflect the new bound
    Lazy,
}

/// CSS selectors locating the parts of one carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselMarkers {
    pub container: String,
    pub track: String,
    /// Scrolling element, only used by [`Advance::Pixels`]
    pub viewport: Option<String>,
    pub slide: String,
    pub indicator: Option<String>,
    pub prev: String,
    pub next: String,
    pub active_class: String,
}

impl CarouselMarkers {
    /// Markers of the image carousel (`imgCarousel` markup).
    #[must_use]
    pub fn slides() -> Self {
        Self {
            container: ".carousel-container".to_string(),
            track: ".carousel-track".to_string(),
            viewport: None,
            slide: ".carousel-slide".to_string(),
            indicator: Some(".carousel-dot".to_string()),
            prev: ".carousel-arrow.prev".to_string(),
            next: ".carousel-arrow.next".to_string(),
            active_class: "active".to_string(),
        }
    }

    /// Markers of the "more to explore" strip.
    #[must_use]
    pub fn pixels() -> Self {
        Self {
            container: ".more-to-explore-carousel".to_string(),
            track: ".explore-carousel-track".to_string(),
            viewport: Some(".explore-carousel-container".to_string()),
            slide: ".carousel-item".to_string(),
            indicator: None,
            prev: ".btn-carousel-prev".to_string(),
            next: ".btn-carousel-next".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl Default for CarouselMarkers {
    fn default() -> Self {
        Self::slides()
    }
}

/// Configuration for one family of carousels on the page.
///
/// Fields missing from a document take the defaults of the declared
/// `advance` mode, so `advance = "pixels"` alone yields the pixel markers
/// and the 15px gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CarouselDocument")]
pub struct CarouselConfig {
    pub advance: Advance,
    pub markers: CarouselMarkers,
    /// Fixed spacing between slides in CSS pixels
    pub gap_px: f64,
    pub breakpoints: BreakpointTable,
    pub resize_policy: ResizePolicy,
    /// Distance from the scroll end treated as "at the end"
    pub end_tolerance_px: f64,
    /// Opacity of a dimmed scroll button
    pub dimmed_opacity: f64,
}

impl CarouselConfig {
    /// Slide-mode defaults: 20px gap, breakpoint table, clamping resize.
    #[must_use]
    pub fn slides() -> Self {
        Self {
            advance: Advance::Slides,
            markers: CarouselMarkers::slides(),
            gap_px: 20.0,
            breakpoints: BreakpointTable::default(),
            resize_policy: ResizePolicy::default(),
            end_tolerance_px: 5.0,
            dimmed_opacity: 0.5,
        }
    }

    /// Pixel-mode defaults: 15px gap, 5px end tolerance, 0.5 dimmed opacity.
    #[must_use]
    pub fn pixels() -> Self {
        Self {
            advance: Advance::Pixels,
            markers: CarouselMarkers::pixels(),
            gap_px: 15.0,
            ..Self::slides()
        }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for negative or non-finite distances, an
    /// opacity outside `[0, 1]`, or a pixel carousel without a viewport
    /// marker. Breakpoint errors are passed through.
    pub fn validate(&self) -> Result<()> {
        non_negative("gap_px", self.gap_px)?;
        non_negative("end_tolerance_px", self.end_tolerance_px)?;
        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(Error::invalid_config(format!(
                "dimmed_opacity {} is outside [0, 1]",
                self.dimmed_opacity
            )));
        }
        if self.advance == Advance::Pixels && self.markers.viewport.is_none() {
            return Err(Error::invalid_config(
                "pixel carousel needs a viewport marker",
            ));
        }
        self.breakpoints.validate()
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::slides()
    }
}

/// Marker selectors as written in a document; unset ones follow the mode.
#[derive(Debug, Default, Deserialize)]
struct MarkersDocument {
    container: Option<String>,
    track: Option<String>,
    viewport: Option<String>,
    slide: Option<String>,
    indicator: Option<String>,
    prev: Option<String>,
    next: Option<String>,
    active_class: Option<String>,
}

impl MarkersDocument {
    fn over(self, base: CarouselMarkers) -> CarouselMarkers {
        CarouselMarkers {
            container: self.container.unwrap_or(base.container),
            track: self.track.unwrap_or(base.track),
            viewport: self.viewport.or(base.viewport),
            slide: self.slide.unwrap_or(base.slide),
            indicator: self.indicator.or(base.indicator),
            prev: self.prev.unwrap_or(base.prev),
            next: self.next.unwrap_or(base.next),
            active_class: self.active_class.unwrap_or(base.active_class),
        }
    }
}

/// A carousel entry as written in a document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CarouselDocument {
    advance: Advance,
    markers: MarkersDocument,
    gap_px: Option<f64>,
    breakpoints: Option<BreakpointTable>,
    resize_policy: Option<ResizePolicy>,
    end_tolerance_px: Option<f64>,
    dimmed_opacity: Option<f64>,
}

impl From<CarouselDocument> for CarouselConfig {
    fn from(doc: CarouselDocument) -> Self {
        let base = match doc.advance {
            Advance::Slides => Self::slides(),
            Advance::Pixels => Self::pixels(),
        };
        Self {
            advance: doc.advance,
            markers: doc.markers.over(base.markers),
            gap_px: doc.gap_px.unwrap_or(base.gap_px),
            breakpoints: doc.breakpoints.unwrap_or(base.breakpoints),
            resize_policy: doc.resize_policy.unwrap_or(base.resize_policy),
            end_tolerance_px: doc.end_tolerance_px.unwrap_or(base.end_tolerance_px),
            dimmed_opacity: doc.dimmed_opacity.unwrap_or(base.dimmed_opacity),
        }
    }
}

/// Selectors and labels of the truncated-description toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadMoreConfig {
    pub link: String,
    pub container: String,
    pub short_text: String,
    pub full_text: String,
    pub collapsed_label: String,
    pub expanded_label: String,
}

impl Default for ReadMoreConfig {
    fn default() -> Self {
        Self {
            link: ".read-more-link".to_string(),
            container: ".description-text".to_string(),
            short_text: ".short-text".to_string(),
            full_text: ".full-text".to_string(),
            collapsed_label: "... read more".to_string(),
            expanded_label: "read less".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Class carried by the modal backdrop element
    pub backdrop_class: String,
    /// Selector matching the currently shown modal
    pub open_selector: String,
    /// `KeyboardEvent.key` that dismisses the open modal
    pub dismiss_key: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            backdrop_class: "modal".to_string(),
            open_selector: ".modal.show".to_string(),
            dismiss_key: "Escape".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    /// Intersection ratio that triggers the reveal
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".fade-in".to_string(),
            threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub prefix: String,
    pub service: String,
    pub default_alt: String,
    /// Upper bound (exclusive) of the cache-busting `random` parameter
    pub nonce_range: u32,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            prefix: "/api/placeholder".to_string(),
            service: "https://picsum.photos".to_string(),
            default_alt: "Exhibition item".to_string(),
            nonce_range: 1000,
        }
    }
}

/// Top-level configuration for every widget on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub carousels: Vec<CarouselConfig>,
    pub read_more: ReadMoreConfig,
    pub modal: ModalConfig,
    pub reveal: RevealConfig,
    pub placeholder: PlaceholderConfig,
    /// Delay before a burst of window resizes is handled
    pub resize_debounce_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carousels: vec![CarouselConfig::slides(), CarouselConfig::pixels()],
            read_more: ReadMoreConfig::default(),
            modal: ModalConfig::default(),
            reveal: RevealConfig::default(),
            placeholder: PlaceholderConfig::default(),
            resize_debounce_ms: 0,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParseFailed` on malformed TOML, or the first
    /// validation error.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::ConfigParseFailed {
            format: "TOML",
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document, as embedded in a page.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParseFailed` on malformed JSON, or the first
    /// validation error.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source).map_err(|e| Error::ConfigParseFailed {
            format: "JSON",
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first invalid carousel, reveal or placeholder setting.
    pub fn validate(&self) -> Result<()> {
        self.carousels.iter().try_for_each(CarouselConfig::validate)?;

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(Error::invalid_config(format!(
                "reveal threshold {} is outside [0, 1]",
                self.reveal.threshold
            )));
        }
        if self.placeholder.nonce_range == 0 {
            return Err(Error::invalid_config("placeholder nonce_range is zero"));
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "{name} must be a non-negative finite number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_defaults_match_page_scripts() {
        let config = Config::default();
        assert_eq!(config.carousels.len(), 2);

        let slides = &config.carousels[0];
        assert_eq!(slides.advance, Advance::Slides);
        assert_eq!(slides.gap_px, 20.0);
        assert_eq!(slides.markers.track, ".carousel-track");
        assert_eq!(slides.resize_policy, ResizePolicy::Clamp);

        let pixels = &config.carousels[1];
        assert_eq!(pixels.advance, Advance::Pixels);
        assert_eq!(pixels.gap_px, 15.0);
        assert_eq!(pixels.end_tolerance_px, 5.0);
        assert_eq!(
            pixels.markers.viewport.as_deref(),
            Some(".explore-carousel-container")
        );

        assert_eq!(config.read_more.collapsed_label, "... read more");
        assert_eq!(config.reveal.threshold, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_documents_yield_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
        assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_json_override() {
        let config = Config::from_json_str(
            r#"{
                "carousels": [{ "resize_policy": "lazy", "gap_px": 24.0 }],
                "modal": { "dismiss_key": "Esc" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.carousels.len(), 1);
        assert_eq!(config.carousels[0].resize_policy, ResizePolicy::Lazy);
        assert_eq!(config.carousels[0].gap_px, 24.0);
        assert_eq!(config.modal.dismiss_key, "Esc");
        assert_eq!(config.modal.open_selector, ".modal.show");
    }

    #[test]
    fn test_pixel_entry_takes_pixel_defaults() {
        let from_json = Config::from_json_str(r#"{"carousels":[{"advance":"pixels"}]}"#).unwrap();
        let from_toml = Config::from_toml_str(
            r#"
            [[carousels]]
            advance = "pixels"
            "#,
        )
        .unwrap();

        for config in [from_json, from_toml] {
            assert_eq!(config.carousels.len(), 1);
            assert_eq!(config.carousels[0], CarouselConfig::pixels());
            assert_eq!(config.carousels[0].gap_px, 15.0);
            assert_eq!(
                config.carousels[0].markers.viewport.as_deref(),
                Some(".explore-carousel-container")
            );
        }
    }

    #[test]
    fn test_partial_markers_keep_mode_defaults() {
        let config = Config::from_json_str(
            r#"{"carousels":[{"advance":"pixels","markers":{"slide":".card"},"gap_px":8.0}]}"#,
        )
        .unwrap();
        let strip = &config.carousels[0];
        assert_eq!(strip.markers.slide, ".card");
        assert_eq!(strip.markers.track, ".explore-carousel-track");
        assert_eq!(strip.markers.indicator, None);
        assert_eq!(strip.gap_px, 8.0);

        let config = Config::from_json_str(r#"{"carousels":[{"markers":{"prev":".back"}}]}"#).unwrap();
        assert_eq!(config.carousels[0].markers.prev, ".back");
        assert_eq!(config.carousels[0].markers.indicator.as_deref(), Some(".carousel-dot"));
        assert_eq!(config.carousels[0].gap_px, 20.0);
    }

    #[test]
    fn test_toml_breakpoints() {
        let config = Config::from_toml_str(
            r#"
            [[carousels]]
            [carousels.breakpoints]
            fallback = 4
            steps = [{ below = 600.0, visible = 1 }, { below = 1200.0, visible = 2 }]
            "#,
        )
        .unwrap();
        assert_eq!(config.carousels[0].breakpoints.fallback(), 4);
        assert_eq!(config.carousels[0].breakpoints.steps().len(), 2);
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            Config::from_toml_str("carousels = 3"),
            Err(Error::ConfigParseFailed { format: "TOML", .. })
        ));
        assert!(matches!(
            Config::from_json_str("{"),
            Err(Error::ConfigParseFailed { format: "JSON", .. })
        ));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = Config::default();
        config.carousels[0].gap_px = -1.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig { .. })));

        let mut config = Config::default();
        config.carousels[1].markers.viewport = None;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.reveal.threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.placeholder.nonce_range = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_breakpoints_in_document() {
        let result = Config::from_json_str(
            r#"{ "carousels": [{ "breakpoints": { "steps": [], "fallback": 0 } }] }"#,
        );
        assert!(matches!(result, Err(Error::InvalidBreakpoints { .. })));
    }
}
