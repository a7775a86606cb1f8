//! Modal dialog dismissal over an abstract modal host
//!
//! The page's dialog framework is reached only through [`ModalHost`], so the
//! dismissal rules (Escape key, backdrop click) can be tested without it.

use tracing::debug;

use crate::config::ModalConfig;
use crate::result::Result;

/// Capability interface of a modal framework.
///
/// Modals are opened and closed by element id, but the active modal is
/// reported as a host-defined handle: a shown dialog need not carry an id
/// to be dismissable.
pub trait ModalHost {
    /// Reference to one shown modal.
    type Handle: std::fmt::Debug;

    /// Shows the modal with the given element id.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot find or create the modal.
    fn show(&mut self, id: &str) -> Result<()>;

    /// Hides the modal with the given element id.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModalNotFound` if the host has no instance for `id`.
    fn hide(&mut self, id: &str) -> Result<()>;

    /// The currently shown modal, if any.
    fn active_modal(&self) -> Option<Self::Handle>;

    /// Hides the modal behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModalNotFound` if the host has no instance for it.
    fn dismiss(&mut self, handle: &Self::Handle) -> Result<()>;
}

/// What a dismissal event did, carrying the host's modal handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismissal<T> {
    /// This modal was hidden
    Hidden(T),
    /// Nothing was open, or the event does not dismiss
    Ignored,
}

#[derive(Debug)]
pub struct ModalController<H> {
    host: H,
    dismiss_key: String,
}

impl<H: ModalHost> ModalController<H> {
    pub fn new(host: H, config: &ModalConfig) -> Self {
        Self {
            host,
            dismiss_key: config.dismiss_key.clone(),
        }
    }

    /// # Errors
    ///
    /// Propagates the host's error.
    pub fn open(&mut self, id: &str) -> Result<()> {
        debug!(id, "Opening modal");
        self.host.show(id)
    }

    /// # Errors
    ///
    /// Propagates the host's error, `Error::ModalNotFound` for unknown ids.
    pub fn close(&mut self, id: &str) -> Result<()> {
        debug!(id, "Closing modal");
        self.host.hide(id)
    }

    /// Handles a key press; the dismiss key hides the active modal.
    ///
    /// # Errors
    ///
    /// Propagates the host's error when hiding fails.
    pub fn on_key(&mut self, key: &str) -> Result<Dismissal<H::Handle>> {
        if key == self.dismiss_key {
            self.dismiss_active()
        } else {
            Ok(Dismissal::Ignored)
        }
    }

    /// Handles a document click. Clicks landing on the backdrop itself
    /// hide the active modal; clicks inside the dialog content do not.
    ///
    /// # Errors
    ///
    /// Propagates the host's error when hiding fails.
    pub fn on_click(&mut self, target_is_backdrop: bool) -> Result<Dismissal<H::Handle>> {
        if target_is_backdrop {
            self.dismiss_active()
        } else {
            Ok(Dismissal::Ignored)
        }
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    fn dismiss_active(&mut self) -> Result<Dismissal<H::Handle>> {
        match self.host.active_modal() {
            Some(modal) => {
                self.host.dismiss(&modal)?;
                debug!(?modal, "Modal dismissed");
                Ok(Dismissal::Hidden(modal))
            }
            None => Ok(Dismissal::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::error::Error;

    /// In-memory host: known modals, at most one shown.
    #[derive(Debug, Default)]
    struct FakeHost {
        known: BTreeSet<String>,
        shown: Option<String>,
        hides: usize,
    }

    impl FakeHost {
        fn with(ids: &[&str]) -> Self {
            Self {
                known: ids.iter().map(|id| (*id).to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl ModalHost for FakeHost {
        type Handle = String;

        fn show(&mut self, id: &str) -> Result<()> {
            if self.known.contains(id) {
                self.shown = Some(id.to_string());
                Ok(())
            } else {
                Err(Error::modal_not_found(id))
            }
        }

        fn hide(&mut self, id: &str) -> Result<()> {
            if self.shown.as_deref() == Some(id) {
                self.shown = None;
                self.hides = self.hides.saturating_add(1);
                Ok(())
            } else {
                Err(Error::modal_not_found(id))
            }
        }

        fn active_modal(&self) -> Option<String> {
            self.shown.clone()
        }

        fn dismiss(&mut self, handle: &String) -> Result<()> {
            self.hide(handle)
        }
    }

    /// Host whose dialogs have no ids; handles are slot numbers.
    #[derive(Debug, Default)]
    struct AnonymousHost {
        shown: Option<usize>,
        dismissed: Vec<usize>,
    }

    impl ModalHost for AnonymousHost {
        type Handle = usize;

        fn show(&mut self, id: &str) -> Result<()> {
            Err(Error::modal_not_found(id))
        }

        fn hide(&mut self, id: &str) -> Result<()> {
            Err(Error::modal_not_found(id))
        }

        fn active_modal(&self) -> Option<usize> {
            self.shown
        }

        fn dismiss(&mut self, handle: &usize) -> Result<()> {
            if self.shown.take() == Some(*handle) {
                self.dismissed.push(*handle);
                Ok(())
            } else {
                Err(Error::modal_not_found(handle.to_string()))
            }
        }
    }

    fn controller() -> ModalController<FakeHost> {
        ModalController::new(
            FakeHost::with(&["objectModal", "artistModal"]),
            &ModalConfig::default(),
        )
    }

    #[test]
    fn test_open_and_close() -> Result<()> {
        let mut modals = controller();
        modals.open("objectModal")?;
        assert_eq!(modals.host().active_modal().as_deref(), Some("objectModal"));

        modals.close("objectModal")?;
        assert_eq!(modals.host().active_modal(), None);
        Ok(())
    }

    #[test]
    fn test_close_unknown_modal_fails() {
        let mut modals = controller();
        assert_eq!(
            modals.close("missing"),
            Err(Error::modal_not_found("missing"))
        );
    }

    #[test]
    fn test_escape_hides_active_modal() -> Result<()> {
        let mut modals = controller();
        modals.open("artistModal")?;

        assert_eq!(
            modals.on_key("Escape")?,
            Dismissal::Hidden("artistModal".to_string())
        );
        assert_eq!(modals.host().hides, 1);
        Ok(())
    }

    #[test]
    fn test_escape_without_active_modal_is_ignored() -> Result<()> {
        let mut modals = controller();
        assert_eq!(modals.on_key("Escape")?, Dismissal::Ignored);
        assert_eq!(modals.host().hides, 0);
        Ok(())
    }

    #[test]
    fn test_other_keys_are_ignored() -> Result<()> {
        let mut modals = controller();
        modals.open("objectModal")?;
        assert_eq!(modals.on_key("Enter")?, Dismissal::Ignored);
        assert!(modals.host().active_modal().is_some());
        Ok(())
    }

    #[test]
    fn test_modal_without_id_is_dismissed_by_handle() -> Result<()> {
        let host = AnonymousHost {
            shown: Some(2),
            ..AnonymousHost::default()
        };
        let mut modals = ModalController::new(host, &ModalConfig::default());

        assert_eq!(modals.on_key("Escape")?, Dismissal::Hidden(2));
        assert_eq!(modals.host().dismissed, vec![2]);
        assert_eq!(modals.host().active_modal(), None);
        Ok(())
    }

    #[test]
    fn test_backdrop_click() -> Result<()> {
        let mut modals = controller();
        modals.open("objectModal")?;

        assert_eq!(modals.on_click(false)?, Dismissal::Ignored);
        assert_eq!(
            modals.on_click(true)?,
            Dismissal::Hidden("objectModal".to_string())
        );
        assert_eq!(modals.on_click(true)?, Dismissal::Ignored);
        Ok(())
    }
}
