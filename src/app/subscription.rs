// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo window.
//!
//! Keyboard events become [`KeyboardInput`] values for the player's keydown
//! listener; the media clock only ticks while the video plays.

use super::Message;
use crate::config::defaults::DEMO_TICK_MS;
use crate::domain::ui::{KeyboardInput, Modifiers};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Key value as the player's shortcut table names it, or `None` for keys
/// the player never handles.
pub(super) fn key_value(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_string()),
        Key::Named(Named::Space) => Some(" ".to_string()),
        Key::Named(Named::ArrowLeft) => Some("ArrowLeft".to_string()),
        Key::Named(Named::ArrowRight) => Some("ArrowRight".to_string()),
        Key::Named(Named::Escape) => Some("Escape".to_string()),
        _ => None,
    }
}

pub(super) fn modifiers(modifiers: keyboard::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.control(),
        meta: modifiers.logo(),
        shift: modifiers.shift(),
        alt: modifiers.alt(),
    }
}

/// Routes uncaptured key presses and window events to the app.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key, modifiers: mods, ..
        }) => {
            if status == event::Status::Captured {
                return None;
            }
            let value = key_value(&key)?;
            Some(Message::KeyPressed {
                window: window_id,
                input: KeyboardInput::with_modifiers(value, modifiers(mods)),
            })
        }
        event::Event::Window(iced::window::Event::Opened { .. })
        | event::Event::Window(iced::window::Event::Focused) => {
            Some(Message::WindowSeen(window_id))
        }
        _ => None,
    })
}

/// Advances the media clock while the video plays.
pub fn create_tick_subscription(playing: bool) -> Subscription<Message> {
    if playing {
        time::every(Duration::from_millis(DEMO_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_shortcut_keys() {
        assert_eq!(key_value(&Key::Character("k".into())), Some("k".into()));
        assert_eq!(key_value(&Key::Named(Named::Space)), Some(" ".into()));
        assert_eq!(
            key_value(&Key::Named(Named::ArrowLeft)),
            Some("ArrowLeft".into())
        );
        assert_eq!(key_value(&Key::Named(Named::Enter)), None);
    }

    #[test]
    fn maps_modifiers() {
        let mapped = modifiers(keyboard::Modifiers::CTRL | keyboard::Modifiers::SHIFT);
        assert!(mapped.ctrl);
        assert!(mapped.shift);
        assert!(!mapped.alt);
        assert!(mapped.blocks_shortcuts());
        assert_eq!(modifiers(keyboard::Modifiers::empty()), Modifiers::NONE);
    }
}
