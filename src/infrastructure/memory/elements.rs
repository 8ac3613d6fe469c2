// SPDX-License-Identifier: MPL-2.0
//! In-memory page elements: container, seek bar, labels and slider.

use super::document::DocumentState;
use crate::application::port::{
    ContainerElement, DocumentEvent, SliderElement, TextElement, TimelineElement,
};
use crate::domain::ui::{ContainerClass, Rect};
use crate::domain::video::{ProgressRatio, VolumeLevel};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::debug;

// =============================================================================
// Container
// =============================================================================

#[derive(Debug, Default)]
struct ContainerState {
    classes: Vec<ContainerClass>,
    custom_classes: Vec<String>,
    volume_level: Option<VolumeLevel>,
    style: BTreeMap<String, String>,
}

/// Shared handle to an in-memory player container.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    state: Rc<RefCell<ContainerState>>,
    document: Weak<RefCell<DocumentState>>,
}

impl MemoryContainer {
    pub(super) fn in_document(document: Weak<RefCell<DocumentState>>) -> Self {
        Self {
            state: Rc::default(),
            document,
        }
    }

    /// Mode classes currently set.
    #[must_use]
    pub fn classes(&self) -> Vec<ContainerClass> {
        self.state.borrow().classes.clone()
    }

    /// Last value written to the `volumeLevel` attribute.
    #[must_use]
    pub fn volume_level(&self) -> Option<VolumeLevel> {
        self.state.borrow().volume_level
    }

    #[must_use]
    pub fn custom_classes(&self) -> Vec<String> {
        self.state.borrow().custom_classes.clone()
    }

    /// Inline style property value.
    #[must_use]
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.state.borrow().style.get(name).cloned()
    }
}

impl ContainerElement for MemoryContainer {
    fn has_class(&self, class: ContainerClass) -> bool {
        self.state.borrow().classes.contains(&class)
    }

    fn set_class(&mut self, class: ContainerClass, present: bool) {
        let mut state = self.state.borrow_mut();
        let index = state.classes.iter().position(|c| *c == class);
        match (index, present) {
            (None, true) => state.classes.push(class),
            (Some(index), false) => {
                state.classes.remove(index);
            }
            _ => {}
        }
    }

    fn set_volume_level(&mut self, level: VolumeLevel) {
        self.state.borrow_mut().volume_level = Some(level);
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .style
            .insert(name.to_string(), value.to_string());
    }

    fn add_custom_class(&mut self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.custom_classes.iter().any(|c| c == class) {
            state.custom_classes.push(class.to_string());
        }
    }

    fn request_fullscreen(&mut self) {
        let Some(document) = self.document.upgrade() else {
            debug!("fullscreen refused: container is not in a document");
            return;
        };
        let mut document = document.borrow_mut();
        if !document.fullscreen_allowed {
            debug!("fullscreen refused by the platform");
            return;
        }
        document.fullscreen = true;
        document.pending.push_back(DocumentEvent::FullscreenChange);
    }
}

// =============================================================================
// Timeline
// =============================================================================

#[derive(Debug, Default)]
struct TimelineState {
    rect: Rect,
    progress: Option<ProgressRatio>,
}

/// Shared handle to an in-memory seek bar.
#[derive(Debug, Clone, Default)]
pub struct MemoryTimeline {
    state: Rc<RefCell<TimelineState>>,
}

impl MemoryTimeline {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            state: Rc::new(RefCell::new(TimelineState {
                rect,
                progress: None,
            })),
        }
    }

    /// Moves or resizes the bar.
    pub fn set_rect(&self, rect: Rect) {
        self.state.borrow_mut().rect = rect;
    }

    /// Last value written to `--progress-position`, if any.
    #[must_use]
    pub fn progress(&self) -> Option<ProgressRatio> {
        self.state.borrow().progress
    }
}

impl TimelineElement for MemoryTimeline {
    fn bounding_rect(&self) -> Rect {
        self.state.borrow().rect
    }

    fn set_progress(&mut self, ratio: ProgressRatio) {
        self.state.borrow_mut().progress = Some(ratio);
    }
}

// =============================================================================
// Text and slider
// =============================================================================

/// Shared handle to an element with text content.
#[derive(Debug, Clone, Default)]
pub struct MemoryText {
    text: Rc<RefCell<String>>,
}

impl MemoryText {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: Rc::new(RefCell::new(text.to_string())),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextElement for MemoryText {
    fn set_text(&mut self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

/// Shared handle to a range input.
#[derive(Debug, Clone, Default)]
pub struct MemorySlider {
    value: Rc<RefCell<f64>>,
}

impl MemorySlider {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
        }
    }
}

impl SliderElement for MemorySlider {
    fn value(&self) -> f64 {
        *self.value.borrow()
    }

    fn set_value(&mut self, value: f64) {
        *self.value.borrow_mut() = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::Document;
    use crate::infrastructure::memory::MemoryDocument;

    #[test]
    fn clones_share_state() {
        let mut container = MemoryContainer::default();
        let observer = container.clone();
        container.set_class(ContainerClass::Theater, true);
        assert!(observer.has_class(ContainerClass::Theater));

        let mut label = MemoryText::default();
        let view = label.clone();
        label.set_text("1:05");
        assert_eq!(view.text(), "1:05");
    }

    #[test]
    fn set_class_is_idempotent() {
        let mut container = MemoryContainer::default();
        container.set_class(ContainerClass::Paused, true);
        container.set_class(ContainerClass::Paused, true);
        assert_eq!(container.classes(), vec![ContainerClass::Paused]);
        container.set_class(ContainerClass::Paused, false);
        container.set_class(ContainerClass::Paused, false);
        assert!(container.classes().is_empty());
    }

    #[test]
    fn custom_classes_are_deduplicated() {
        let mut container = MemoryContainer::default();
        container.add_custom_class("rounded");
        container.add_custom_class("rounded");
        assert_eq!(container.custom_classes(), vec!["rounded".to_string()]);
    }

    #[test]
    fn fullscreen_request_queues_notification() {
        let document = MemoryDocument::new();
        let mut container = document.create_container();
        container.request_fullscreen();
        assert!(document.has_fullscreen_element());
        assert_eq!(document.take_pending(), vec![DocumentEvent::FullscreenChange]);
    }

    #[test]
    fn refused_fullscreen_changes_nothing() {
        let document = MemoryDocument::new();
        document.set_fullscreen_allowed(false);
        let mut container = document.create_container();
        container.request_fullscreen();
        assert!(!document.has_fullscreen_element());
        assert!(document.take_pending().is_empty());
    }

    #[test]
    fn detached_container_cannot_go_fullscreen() {
        let mut container = MemoryContainer::default();
        container.request_fullscreen();
        assert!(!container.has_class(ContainerClass::FullScreen));
    }
}
