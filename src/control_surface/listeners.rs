// SPDX-License-Identifier: MPL-2.0
//! Tokens of the document listeners one control surface registered.

use crate::application::port::{ListenerId, ListenerKind};

/// Listener tokens held between attach and detach.
///
/// Detaching removes exactly these tokens, and incoming document events are
/// accepted only under a token stored here for the matching kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerRegistry {
    entries: Vec<(ListenerKind, ListenerId)>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while any listener is registered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, kind: ListenerKind, id: ListenerId) {
        self.entries.push((kind, id));
    }

    /// Returns true if `id` was registered by this surface for `kind`.
    #[must_use]
    pub fn owns(&self, id: ListenerId, kind: ListenerKind) -> bool {
        self.entries.iter().any(|&(k, i)| k == kind && i == id)
    }

    /// Registered tokens, in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<ListenerId> {
        self.entries.iter().map(|&(_, id)| id).collect()
    }

    /// Removes and returns every token.
    pub fn drain(&mut self) -> Vec<ListenerId> {
        self.entries.drain(..).map(|(_, id)| id).collect()
    }
}
