// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo window.

use crate::domain::ui::KeyboardInput;
use crate::ui::video_controls;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Control bar interaction.
    Controls(video_controls::Message),
    /// Key pressed in the window and not captured by a widget.
    KeyPressed {
        window: window::Id,
        input: KeyboardInput,
    },
    /// Any window event; records the window id for mode changes.
    WindowSeen(window::Id),
    /// Media clock tick while playing.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Video source; overrides the one in the settings file.
    pub video: Option<String>,
    /// Caption track source.
    pub captions: Option<String>,
    /// Accent colour (`#rrggbb`).
    pub accent: Option<String>,
}
