// SPDX-License-Identifier: MPL-2.0
//! Message handling: control bar widgets and key presses are replayed as
//! the platform events the player listens to.

use super::Message;
use crate::application::port::DocumentEvent;
use crate::config::defaults::DEMO_TICK_MS;
use crate::domain::ui::{KeyboardInput, PointerInput, PresentationMode};
use crate::domain::video::Volume;
use crate::infrastructure::memory::player::TIMELINE_WIDTH;
use crate::infrastructure::MemoryPlayer;
use crate::ui::video_controls;
use iced::{window, Task};
use tracing::debug;

/// Mutable app state touched by an update.
pub(super) struct UpdateContext<'a> {
    pub player: &'a mut MemoryPlayer,
    pub window_id: &'a mut Option<window::Id>,
    pub window_fullscreen: &'a mut bool,
    /// Seek bar position of the current drag, in timeline pixels.
    pub seek_x: &'a mut f64,
    /// Volume slider value of the current drag.
    pub pending_volume: &'a mut f64,
}

pub(super) fn handle(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Controls(message) => handle_controls(ctx, message),
        Message::KeyPressed { window, input } => {
            *ctx.window_id = Some(window);
            handle_key(ctx, input);
        }
        Message::WindowSeen(window) => {
            *ctx.window_id = Some(window);
        }
        Message::Tick(_) => {
            ctx.player.tick(DEMO_TICK_MS as f64 / 1000.0);
        }
    }
    update_fullscreen_mode(ctx)
}

fn handle_controls(ctx: &mut UpdateContext<'_>, message: video_controls::Message) {
    use video_controls::Message as M;

    let player = &mut *ctx.player;
    match message {
        M::TogglePlay => player.surface_mut().toggle_play(),
        M::SeekPreview(ratio) => {
            let x = ratio.clamp(0.0, 1.0) * TIMELINE_WIDTH;
            *ctx.seek_x = x;
            if player.surface().is_scrubbing() {
                player.dispatch(&DocumentEvent::MouseMove(PointerInput::pressed(x)));
            } else {
                player
                    .surface_mut()
                    .on_timeline_pointer_down(PointerInput::pressed(x));
            }
        }
        M::SeekCommit => {
            player.dispatch(&DocumentEvent::MouseUp(PointerInput::released(*ctx.seek_x)));
        }
        M::SkipBackward => {
            let step = player.surface().seek_step().value();
            player.surface_mut().skip(-step);
        }
        M::SkipForward => {
            let step = player.surface().seek_step().value();
            player.surface_mut().skip(step);
        }
        M::ChangePlaybackSpeed => {
            let rate = player.surface_mut().change_playback_speed();
            debug!(rate = rate.value(), "playback speed changed");
        }
        M::ToggleMute => {
            player.surface_mut().toggle_mute();
        }
        M::VolumeInput(value) => {
            *ctx.pending_volume = value;
            player.surface_mut().on_volume_input(Volume::new(value));
        }
        M::VolumeCommit => {
            player
                .surface_mut()
                .on_volume_change(Volume::new(*ctx.pending_volume));
        }
        M::ToggleCaptions => {
            let toggle = player.surface_mut().toggle_captions();
            debug!(?toggle, "captions toggled");
        }
        M::ToggleMiniPlayer => {
            player.surface_mut().toggle_mini_player_mode();
        }
        M::ToggleTheater => {
            player.surface_mut().toggle_theater_mode();
        }
        M::ToggleFullScreen => {
            player.surface_mut().toggle_full_screen_mode();
        }
    }
    player.pump();
}

/// Escape leaves fullscreen the way a browser does; every other key goes to
/// the player's keydown listener.
fn handle_key(ctx: &mut UpdateContext<'_>, input: KeyboardInput) {
    if input.key == "Escape" {
        if ctx.player.snapshot().mode == PresentationMode::FullScreen {
            ctx.player.document.leave_fullscreen();
            ctx.player.pump();
        }
        return;
    }
    ctx.player.dispatch(&DocumentEvent::KeyDown(input));
}

/// Mirrors the document's fullscreen element onto the real window.
fn update_fullscreen_mode(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let fullscreen = ctx.player.snapshot().mode == PresentationMode::FullScreen;
    if fullscreen == *ctx.window_fullscreen {
        return Task::none();
    }
    let Some(window_id) = *ctx.window_id else {
        return Task::none();
    };

    *ctx.window_fullscreen = fullscreen;
    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    debug!(?mode, "window mode changed");
    window::set_mode(window_id, mode)
}
