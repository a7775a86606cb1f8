//! Expand/collapse toggle for truncated descriptions

use crate::config::ReadMoreConfig;

/// CSS `display` value of a visible span.
pub const SHOWN: &str = "inline";
/// CSS `display` value of a hidden span.
pub const HIDDEN: &str = "none";

/// Output of one toggle: display values for both spans and the link label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadMoreFrame {
    pub short_display: &'static str,
    pub full_display: &'static str,
    pub label: String,
}

/// Toggle state of one description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadMore {
    expanded: bool,
    collapsed_label: String,
    expanded_label: String,
}

impl ReadMore {
    /// Starts collapsed.
    #[must_use]
    pub fn new(config: &ReadMoreConfig) -> Self {
        Self {
            expanded: false,
            collapsed_label: config.collapsed_label.clone(),
            expanded_label: config.expanded_label.clone(),
        }
    }

    /// Reads the expanded flag from the full span's current `display`.
    ///
    /// Only an explicit `inline` counts as expanded; stylesheet defaults
    /// leave the inline style empty.
    pub fn sync_from_display(&mut self, full_display: &str) {
        self.expanded = full_display == SHOWN;
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Link label for the current state.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.expanded {
            &self.expanded_label
        } else {
            &self.collapsed_label
        }
    }

    /// Flips the state and returns what to draw.
    pub fn toggle(&mut self) -> ReadMoreFrame {
        self.expanded = !self.expanded;
        self.frame()
    }

    #[must_use]
    pub fn frame(&self) -> ReadMoreFrame {
        let (short_display, full_display) = if self.expanded {
            (HIDDEN, SHOWN)
        } else {
            (SHOWN, HIDDEN)
        };
        ReadMoreFrame {
            short_display,
            full_display,
            label: self.label().to_string(),
        }
    }
}
