// SPDX-License-Identifier: MPL-2.0
//! In-memory document.

use super::elements::MemoryContainer;
use super::media::{MediaState, MemoryMedia};
use crate::application::port::{Document, DocumentEvent, ListenerId, ListenerKind, MediaEvent};
use crate::domain::ui::FocusKind;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug)]
pub(super) struct DocumentState {
    next_listener: u64,
    listeners: BTreeMap<ListenerId, ListenerKind>,
    pub(super) fullscreen: bool,
    pub(super) fullscreen_allowed: bool,
    /// Media currently shown in picture-in-picture.
    pub(super) picture_in_picture: Option<Rc<RefCell<MediaState>>>,
    pub(super) picture_in_picture_allowed: bool,
    focus: FocusKind,
    /// Notifications waiting to be delivered to listeners.
    pub(super) pending: VecDeque<DocumentEvent>,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            next_listener: 1,
            listeners: BTreeMap::new(),
            fullscreen: false,
            fullscreen_allowed: true,
            picture_in_picture: None,
            picture_in_picture_allowed: true,
            focus: FocusKind::Other,
            pending: VecDeque::new(),
        }
    }
}

/// Shared handle to an in-memory document.
///
/// Fullscreen and picture-in-picture requests are granted unless refused
/// with [`set_fullscreen_allowed`](Self::set_fullscreen_allowed) or
/// [`set_picture_in_picture_allowed`](Self::set_picture_in_picture_allowed).
/// A granted request queues the matching change notification; nothing is
/// delivered until the host drains the queue.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pub(super) state: Rc<RefCell<DocumentState>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a media element of `duration_secs` living in this document.
    #[must_use]
    pub fn create_media(&self, duration_secs: f64) -> MemoryMedia {
        MemoryMedia::in_document(duration_secs, Rc::downgrade(&self.state))
    }

    /// Creates a container element living in this document.
    #[must_use]
    pub fn create_container(&self) -> MemoryContainer {
        MemoryContainer::in_document(Rc::downgrade(&self.state))
    }

    pub fn set_fullscreen_allowed(&self, allowed: bool) {
        self.state.borrow_mut().fullscreen_allowed = allowed;
    }

    pub fn set_picture_in_picture_allowed(&self, allowed: bool) {
        self.state.borrow_mut().picture_in_picture_allowed = allowed;
    }

    pub fn set_focus(&self, focus: FocusKind) {
        self.state.borrow_mut().focus = focus;
    }

    /// Sets the fullscreen flag without queueing a notification.
    pub fn set_fullscreen_element(&self, fullscreen: bool) {
        self.state.borrow_mut().fullscreen = fullscreen;
    }

    /// Leaves fullscreen the way the platform does on Escape.
    pub fn leave_fullscreen(&self) {
        let mut state = self.state.borrow_mut();
        if state.fullscreen {
            state.fullscreen = false;
            state.pending.push_back(DocumentEvent::FullscreenChange);
        }
    }

    /// Closes the picture-in-picture window, if any.
    pub fn leave_picture_in_picture(&self) {
        let media = self.state.borrow_mut().picture_in_picture.take();
        if let Some(media) = media {
            media
                .borrow_mut()
                .events
                .push_back(MediaEvent::LeavePictureInPicture);
        }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Tokens of the live listeners of `kind`, in registration order.
    #[must_use]
    pub fn listeners_for(&self, kind: ListenerKind) -> Vec<ListenerId> {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Drains the queued notifications.
    #[must_use]
    pub fn take_pending(&self) -> Vec<DocumentEvent> {
        self.state.borrow_mut().pending.drain(..).collect()
    }
}

impl Document for MemoryDocument {
    fn has_fullscreen_element(&self) -> bool {
        self.state.borrow().fullscreen
    }

    fn has_picture_in_picture_element(&self) -> bool {
        self.state.borrow().picture_in_picture.is_some()
    }

    fn exit_fullscreen(&mut self) {
        self.leave_fullscreen();
    }

    fn exit_picture_in_picture(&mut self) {
        self.leave_picture_in_picture();
    }

    fn focused_element(&self) -> FocusKind {
        self.state.borrow().focus
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.insert(id, kind);
        debug!(id = id.0, kind = kind.event_type(), "listener added");
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        if let Some(kind) = self.state.borrow_mut().listeners.remove(&id) {
            debug!(id = id.0, kind = kind.event_type(), "listener removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_tokens_are_unique_and_removable() {
        let mut document = MemoryDocument::new();
        let a = document.add_listener(ListenerKind::KeyDown);
        let b = document.add_listener(ListenerKind::KeyDown);
        assert_ne!(a, b);
        assert_eq!(document.listeners_for(ListenerKind::KeyDown), vec![a, b]);

        document.remove_listener(a);
        document.remove_listener(a);
        assert_eq!(document.listeners_for(ListenerKind::KeyDown), vec![b]);
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn leaving_fullscreen_queues_one_notification() {
        let document = MemoryDocument::new();
        document.leave_fullscreen();
        assert!(document.take_pending().is_empty());

        document.set_fullscreen_element(true);
        document.leave_fullscreen();
        assert_eq!(document.take_pending(), vec![DocumentEvent::FullscreenChange]);
        assert!(!document.has_fullscreen_element());
    }

    #[test]
    fn focus_defaults_to_other() {
        let document = MemoryDocument::new();
        assert_eq!(document.focused_element(), FocusKind::Other);
        document.set_focus(FocusKind::TextInput);
        assert_eq!(document.focused_element(), FocusKind::TextInput);
    }
}
