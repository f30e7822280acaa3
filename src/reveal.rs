//! Scroll-triggered reveal registry.
//!
//! Elements are registered once at setup and receive a numeric id. Observer
//! entries are fed back by id; an element is revealed the first time it is
//! reported as intersecting and never hidden again.
//!
//! [`RevealTargets`] maps an observed element back to its id by identity, so
//! the page markup carries no bookkeeping attributes.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// One observer report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub id: usize,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark the element visible and stop watching it.
    Reveal,
    Ignore,
}

#[derive(Debug, Default)]
pub struct RevealRegistry {
    registered: usize,
    revealed: HashSet<usize>,
}

impl RevealRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new eligible element and return its id.
    pub fn register(&mut self) -> usize {
        let id = self.registered;
        self.registered += 1;
        id
    }

    /// Process one observer report.
    pub fn observe(&mut self, entry: VisibilityEntry) -> RevealAction {
        if entry.id >= self.registered || !entry.is_intersecting {
            return RevealAction::Ignore;
        }
        if self.revealed.insert(entry.id) {
            RevealAction::Reveal
        } else {
            RevealAction::Ignore
        }
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }

    #[cfg(test)]
    pub(crate) fn registered(&self) -> usize {
        self.registered
    }
}

/// Registered elements paired with their ids, in registration order.
#[derive(Debug)]
pub struct RevealTargets<T> {
    entries: Vec<(usize, T)>,
}

impl<T: PartialEq> RevealTargets<T> {
    /// Register every element with `registry`.
    pub fn register_all(registry: &mut RevealRegistry, elements: impl IntoIterator<Item = T>) -> Self {
        let entries = elements.into_iter().map(|element| (registry.register(), element)).collect();
        Self { entries }
    }

    /// Id of `element`, compared by equality (identity for DOM handles).
    #[must_use]
    pub fn id_of(&self, element: &T) -> Option<usize> {
        self.entries
            .iter()
            .find_map(|(id, candidate)| (candidate == element).then_some(*id))
    }

    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, element)| element)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
