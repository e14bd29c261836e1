//! Bounded comparison selection
//!
//! An ordered set of catalog ids chosen for side-by-side comparison.
//! Capacity is fixed at [`MAX_COMPARE`]; a toggle against a full set is
//! silently ignored rather than evicting the oldest entry.

use tracing::debug;

/// Capacity of the comparison set
pub const MAX_COMPARE: usize = 4;

/// Result of a toggle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set already held `MAX_COMPARE` other ids; state unchanged
    RejectedFull,
}

/// Comparison selection state. Insertion order is preserved and drives the
/// comparison display order. Initialized empty, mutated only through
/// [`toggle`](Self::toggle) / [`remove`](Self::remove) /
/// [`clear`](Self::clear); not persisted anywhere.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    ids: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids in selection order
    pub fn selected(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// At capacity. An already-selected id stays toggleable for removal
    /// even when this returns true; the UI combines this with
    /// [`is_selected`](Self::is_selected) to decide which buttons to
    /// disable.
    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    /// Toggle membership: selected ids are removed, unselected ids are
    /// appended while capacity allows. At capacity a new id is rejected
    /// without error and without eviction.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            debug!("Removed {} from comparison ({} selected)", id, self.ids.len());
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            debug!("Comparison set full, ignoring {}", id);
            return ToggleOutcome::RejectedFull;
        }

        self.ids.push(id.to_string());
        debug!("Added {} to comparison ({} selected)", id, self.ids.len());
        ToggleOutcome::Added
    }

    /// Remove `id` if present. Idempotent; returns whether anything changed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|i| i == id) {
            Some(pos) => {
                self.ids.remove(pos);
                debug!("Removed {} from comparison ({} selected)", id, self.ids.len());
                true
            }
            None => false,
        }
    }

    /// Explicit remove-all
    pub fn clear(&mut self) {
        self.ids.clear();
        debug!("Comparison selection cleared");
    }
}
