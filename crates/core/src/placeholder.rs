//! Rewrites template placeholder image URLs to a real placeholder service
//!
//! `/api/placeholder/400/300` becomes `https://picsum.photos/400/300?random=N`.
//! The nonce is supplied by the caller so the rewrite itself is deterministic.

use crate::config::PlaceholderConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderImage {
    pub src: String,
    pub alt: String,
}

/// Returns the rewritten image, or `None` when `src` is not a placeholder.
///
/// The last two path segments are taken as width and height, whatever the
/// path depth. Fewer than two segments after the prefix leaves the image
/// alone.
///
/// # Examples
///
/// ```
/// use vitrine_core::config::PlaceholderConfig;
/// use vitrine_core::placeholder::rewrite;
///
/// let config = PlaceholderConfig::default();
/// let image = rewrite("/api/placeholder/400/300", "", 1234, &config);
/// assert_eq!(
///     image.map(|i| i.src),
///     Some("https://picsum.photos/400/300?random=234".to_string())
/// );
/// ```
#[must_use]
pub fn rewrite(src: &str, alt: &str, nonce: u32, config: &PlaceholderConfig) -> Option<PlaceholderImage> {
    let rest = src.strip_prefix(config.prefix.as_str())?;

    let mut segments = rest.split('/').filter(|s| !s.is_empty()).rev();
    let height = segments.next()?;
    let width = segments.next()?;

    let random = nonce.checked_rem(config.nonce_range).unwrap_or(0);
    let alt = if alt.is_empty() {
        config.default_alt.clone()
    } else {
        alt.to_string()
    };

    Some(PlaceholderImage {
        src: format!(
            "{}/{width}/{height}?random={random}",
            config.service.trim_end_matches('/')
        ),
        alt,
    })
}
