// SPDX-License-Identifier: MPL-2.0
//! Raw input values delivered by the platform.

/// Keyboard modifier state at the time of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Returns true if a modifier that disables player shortcuts is held.
    ///
    /// Alt is not one of them.
    #[must_use]
    pub fn blocks_shortcuts(self) -> bool {
        self.ctrl || self.meta || self.shift
    }
}

/// A `keydown` event: the key value (`"k"`, `" "`, `"ArrowLeft"`) and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardInput {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyboardInput {
    /// Key press without modifiers.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Key press with the given modifiers.
    #[must_use]
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// Kind of the element holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusKind {
    /// A text input; every shortcut is ignored.
    TextInput,
    /// A button; space activates it, so the space shortcut is ignored.
    Button,
    /// Anything else (body, the video, a div).
    #[default]
    Other,
}

/// Pressed-buttons bitmask of a pointer event (`MouseEvent.buttons`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons(pub u16);

impl PointerButtons {
    /// No button held.
    pub const NONE: Self = Self(0);
    /// Primary button held.
    pub const PRIMARY: Self = Self(1);

    /// Returns true if the primary button bit is set.
    #[must_use]
    pub fn primary_held(self) -> bool {
        self.0 & 1 == 1
    }
}

/// A pointer event reduced to what the seek bar needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    /// Horizontal client coordinate.
    pub x: f64,
    pub buttons: PointerButtons,
}

impl PointerInput {
    #[must_use]
    pub fn new(x: f64, buttons: PointerButtons) -> Self {
        Self { x, buttons }
    }

    /// Pointer pressed (primary button held) at `x`.
    #[must_use]
    pub fn pressed(x: f64) -> Self {
        Self::new(x, PointerButtons::PRIMARY)
    }

    /// Pointer released at `x`.
    #[must_use]
    pub fn released(x: f64) -> Self {
        Self::new(x, PointerButtons::NONE)
    }
}

/// Bounding rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_ctrl_meta_block_shortcuts() {
        assert!(!Modifiers::NONE.blocks_shortcuts());
        for modifiers in [
            Modifiers { ctrl: true, ..Modifiers::NONE },
            Modifiers { meta: true, ..Modifiers::NONE },
            Modifiers { shift: true, ..Modifiers::NONE },
        ] {
            assert!(modifiers.blocks_shortcuts());
        }
        assert!(!Modifiers { alt: true, ..Modifiers::NONE }.blocks_shortcuts());
    }

    #[test]
    fn primary_button_bit() {
        assert!(PointerButtons::PRIMARY.primary_held());
        assert!(PointerButtons(3).primary_held());
        assert!(!PointerButtons(2).primary_held());
        assert!(!PointerButtons::NONE.primary_held());
    }
}
