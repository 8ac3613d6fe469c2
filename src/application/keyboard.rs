// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcut table.
//!
//! | key              | action               |
//! |------------------|----------------------|
//! | space, k         | toggle play          |
//! | f                | toggle fullscreen    |
//! | t                | toggle theater mode  |
//! | i                | toggle mini-player   |
//! | m                | toggle mute          |
//! | ArrowLeft, j     | seek backward        |
//! | ArrowRight, l    | seek forward         |
//! | c                | toggle captions      |
//!
//! Keys are matched case-insensitively. Nothing fires while a text input has
//! focus or while ctrl, meta or shift is held; space is also skipped when a
//! button has focus, since the button handles it.

use crate::domain::ui::{FocusKind, KeyboardInput};

/// Action bound to a shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlay,
    ToggleFullScreen,
    ToggleTheater,
    ToggleMiniPlayer,
    ToggleMute,
    SeekBackward,
    SeekForward,
    ToggleCaptions,
}

/// Resolves a key press to its action, or `None` if the press is not a
/// player shortcut in the current focus context.
#[must_use]
pub fn resolve(input: &KeyboardInput, focus: FocusKind) -> Option<KeyAction> {
    if focus == FocusKind::TextInput || input.modifiers.blocks_shortcuts() {
        return None;
    }

    match input.key.to_lowercase().as_str() {
        " " if focus == FocusKind::Button => None,
        " " | "k" => Some(KeyAction::TogglePlay),
        "f" => Some(KeyAction::ToggleFullScreen),
        "t" => Some(KeyAction::ToggleTheater),
        "i" => Some(KeyAction::ToggleMiniPlayer),
        "m" => Some(KeyAction::ToggleMute),
        "arrowleft" | "j" => Some(KeyAction::SeekBackward),
        "arrowright" | "l" => Some(KeyAction::SeekForward),
        "c" => Some(KeyAction::ToggleCaptions),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::Modifiers;

    fn key(k: &str) -> KeyboardInput {
        KeyboardInput::new(k)
    }

    #[test]
    fn maps_every_shortcut() {
        let table = [
            (" ", KeyAction::TogglePlay),
            ("k", KeyAction::TogglePlay),
            ("f", KeyAction::ToggleFullScreen),
            ("t", KeyAction::ToggleTheater),
            ("i", KeyAction::ToggleMiniPlayer),
            ("m", KeyAction::ToggleMute),
            ("ArrowLeft", KeyAction::SeekBackward),
            ("j", KeyAction::SeekBackward),
            ("ArrowRight", KeyAction::SeekForward),
            ("l", KeyAction::SeekForward),
            ("c", KeyAction::ToggleCaptions),
        ];
        for (k, action) in table {
            assert_eq!(resolve(&key(k), FocusKind::Other), Some(action), "key {k:?}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve(&key("K"), FocusKind::Other), Some(KeyAction::TogglePlay));
        assert_eq!(
            resolve(&key("ARROWRIGHT"), FocusKind::Other),
            Some(KeyAction::SeekForward)
        );
    }

    #[test]
    fn text_input_focus_disables_all_shortcuts() {
        for k in [" ", "k", "f", "m", "ArrowLeft"] {
            assert_eq!(resolve(&key(k), FocusKind::TextInput), None);
        }
    }

    #[test]
    fn space_is_left_to_focused_buttons() {
        assert_eq!(resolve(&key(" "), FocusKind::Button), None);
        assert_eq!(
            resolve(&key("k"), FocusKind::Button),
            Some(KeyAction::TogglePlay)
        );
    }

    #[test]
    fn blocking_modifiers_disable_shortcuts() {
        let ctrl = KeyboardInput::with_modifiers(
            "f",
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(resolve(&ctrl, FocusKind::Other), None);

        let alt = KeyboardInput::with_modifiers(
            "f",
            Modifiers {
                alt: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(
            resolve(&alt, FocusKind::Other),
            Some(KeyAction::ToggleFullScreen)
        );
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        for k in ["x", "Enter", "ArrowUp", "", "kk"] {
            assert_eq!(resolve(&key(k), FocusKind::Other), None);
        }
    }
}
