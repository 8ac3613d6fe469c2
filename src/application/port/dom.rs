// SPDX-License-Identifier: MPL-2.0
//! Document and element port definitions.
//!
//! These traits cover the page structure around the media element: the
//! player container, the seek bar, text labels, the volume slider, and the
//! document that owns global listeners and the fullscreen state.
//!
//! # Listener registration
//!
//! Global listeners are registered through [`Document::add_listener`], which
//! returns a [`ListenerId`] token. The same token is handed back to
//! [`Document::remove_listener`], so a registration can always be undone
//! exactly. The platform delivers events together with the token they were
//! registered under.

use crate::domain::ui::{ContainerClass, FocusKind, KeyboardInput, PointerInput, Rect};
use crate::domain::video::{ProgressRatio, VolumeLevel};

/// Name of the accent colour custom property.
pub const ACCENT_COLOR_PROPERTY: &str = "--video-accent-color";

// =============================================================================
// Elements
// =============================================================================

/// Port for the root player element.
pub trait ContainerElement {
    fn has_class(&self, class: ContainerClass) -> bool;

    /// Adds or removes `class`.
    fn set_class(&mut self, class: ContainerClass, present: bool);

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&mut self, class: ContainerClass) -> bool {
        let present = !self.has_class(class);
        self.set_class(class, present);
        present
    }

    /// Writes the `volumeLevel` data attribute.
    fn set_volume_level(&mut self, level: VolumeLevel);

    /// Sets an inline custom property (`--video-accent-color`).
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Adds a host-supplied class.
    fn add_custom_class(&mut self, class: &str);

    /// Asks the platform to make this element the fullscreen element.
    fn request_fullscreen(&mut self);
}

/// Port for the seek bar.
pub trait TimelineElement {
    /// Bounding rectangle in client coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Writes the `--progress-position` custom property.
    fn set_progress(&mut self, ratio: ProgressRatio);
}

/// Port for an element whose text content the player writes
/// (time labels, speed button).
pub trait TextElement {
    fn set_text(&mut self, text: &str);
}

/// Port for the volume range input.
pub trait SliderElement {
    /// Current slider value.
    fn value(&self) -> f64;

    fn set_value(&mut self, value: f64);
}

// =============================================================================
// Document
// =============================================================================

/// Kind of a document-level listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    KeyDown,
    MouseUp,
    MouseMove,
    FullscreenChange,
}

impl ListenerKind {
    /// Every kind the player registers.
    pub const ALL: [Self; 4] = [
        Self::KeyDown,
        Self::MouseUp,
        Self::MouseMove,
        Self::FullscreenChange,
    ];

    /// DOM event type name.
    #[must_use]
    pub fn event_type(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::MouseUp => "mouseup",
            Self::MouseMove => "mousemove",
            Self::FullscreenChange => "fullscreenchange",
        }
    }
}

/// Deregistration token returned by [`Document::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Event delivered to a document-level listener.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    KeyDown(KeyboardInput),
    MouseUp(PointerInput),
    MouseMove(PointerInput),
    FullscreenChange,
}

impl DocumentEvent {
    /// Listener kind this event is delivered to.
    #[must_use]
    pub fn kind(&self) -> ListenerKind {
        match self {
            Self::KeyDown(_) => ListenerKind::KeyDown,
            Self::MouseUp(_) => ListenerKind::MouseUp,
            Self::MouseMove(_) => ListenerKind::MouseMove,
            Self::FullscreenChange => ListenerKind::FullscreenChange,
        }
    }
}

/// Whether a handler used an event. `Consumed` asks the platform to
/// suppress the default action (`preventDefault`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Consumed,
    Ignored,
}

impl EventDisposition {
    #[must_use]
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Port for the host document.
pub trait Document {
    /// Returns true if any element is currently fullscreen.
    fn has_fullscreen_element(&self) -> bool;

    /// Returns true if any video is currently in picture-in-picture.
    fn has_picture_in_picture_element(&self) -> bool;

    fn exit_fullscreen(&mut self);

    fn exit_picture_in_picture(&mut self);

    /// Kind of the element holding keyboard focus.
    fn focused_element(&self) -> FocusKind;

    /// Registers a listener and returns its deregistration token.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Removes the listener registered under `id`. Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(
        _: &dyn ContainerElement,
        _: &dyn TimelineElement,
        _: &dyn TextElement,
        _: &dyn SliderElement,
        _: &dyn Document,
    ) {
    }

    #[test]
    fn event_kinds_match_listener_kinds() {
        assert_eq!(
            DocumentEvent::KeyDown(KeyboardInput::new("k")).kind(),
            ListenerKind::KeyDown
        );
        assert_eq!(
            DocumentEvent::MouseUp(PointerInput::released(0.0)).kind(),
            ListenerKind::MouseUp
        );
        assert_eq!(
            DocumentEvent::MouseMove(PointerInput::pressed(0.0)).kind(),
            ListenerKind::MouseMove
        );
        assert_eq!(
            DocumentEvent::FullscreenChange.kind(),
            ListenerKind::FullscreenChange
        );
    }

    #[test]
    fn event_type_names() {
        let names: Vec<_> = ListenerKind::ALL.iter().map(|k| k.event_type()).collect();
        assert_eq!(names, ["keydown", "mouseup", "mousemove", "fullscreenchange"]);
    }

    struct Classes(Vec<ContainerClass>);

    impl ContainerElement for Classes {
        fn has_class(&self, class: ContainerClass) -> bool {
            self.0.contains(&class)
        }
        fn set_class(&mut self, class: ContainerClass, present: bool) {
            self.0.retain(|c| *c != class);
            if present {
                self.0.push(class);
            }
        }
        fn set_volume_level(&mut self, _level: VolumeLevel) {}
        fn set_style_property(&mut self, _name: &str, _value: &str) {}
        fn add_custom_class(&mut self, _class: &str) {}
        fn request_fullscreen(&mut self) {}
    }

    #[test]
    fn default_toggle_class_flips_membership() {
        let mut classes = Classes(Vec::new());
        assert!(classes.toggle_class(ContainerClass::Theater));
        assert!(classes.has_class(ContainerClass::Theater));
        assert!(!classes.toggle_class(ContainerClass::Theater));
        assert!(!classes.has_class(ContainerClass::Theater));
    }
}
