//! One-shot reveal of elements scrolled into view
//!
//! Ids are opaque to the tracker; the DOM layer uses the element's position
//! in the query result.

use std::collections::BTreeSet;

/// One intersection observer record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub id: usize,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    pending: BTreeSet<usize>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching an element. Re-observing a revealed id arms it again.
    pub fn observe(&mut self, id: usize) {
        self.pending.insert(id);
    }

    #[must_use]
    pub fn is_pending(&self, id: usize) -> bool {
        self.pending.contains(&id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the ids to reveal, in entry order, and stops watching them.
    pub fn on_entries<I>(&mut self, entries: I) -> Vec<usize>
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        entries
            .into_iter()
            .filter(|entry| entry.is_intersecting)
            .filter_map(|entry| self.pending.remove(&entry.id).then_some(entry.id))
            .collect()
    }
}
