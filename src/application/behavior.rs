// SPDX-License-Identifier: MPL-2.0
//! Player behaviors.
//!
//! Stateless operations over element handles. Each one performs a single
//! platform mutation (play state, a container class, a custom property, the
//! volume, a text track mode, the playback rate) and reports what it did.
//!
//! None of them fail. Platform requests such as fullscreen or
//! picture-in-picture may be refused by the platform; that is not observed
//! here. The matching change notification simply never arrives, and the
//! container classes are only reconciled from notifications.

use crate::application::port::{
    ContainerElement, Document, EventDisposition, MediaElement, SliderElement, TextElement,
    TextTrackMode, TimelineElement,
};
use crate::application::scrub::{ScrubGesture, ScrubTransition};
use crate::domain::ui::{
    ContainerClass, PointerInput, PresentationCommand, PresentationRequest, PresentationState,
    Rect,
};
use crate::domain::video::{
    format_duration, PlayStatus, PlaybackRate, ProgressRatio, Volume, VolumeLevel,
};
use tracing::{debug, trace};

/// Index of the text track the captions button drives.
pub const PRIMARY_TEXT_TRACK: usize = 0;

// =============================================================================
// Timeline
// =============================================================================

/// Ratio of the seek bar under a pointer at `pointer_x`.
///
/// `clamp(x − left, 0, width) / width`. Always within [0, 1] and
/// non-decreasing in `pointer_x`; a zero-width bar yields zero.
#[must_use]
pub fn seek_ratio(pointer_x: f64, rect: Rect) -> ProgressRatio {
    if rect.width.is_nan() || rect.width <= 0.0 {
        return ProgressRatio::ZERO;
    }
    let offset = (pointer_x - rect.x).max(0.0).min(rect.width);
    ProgressRatio::new(offset / rect.width)
}

/// Moves the bar fill to the pointer while scrubbing.
///
/// Outside a scrub the event is left alone.
pub fn update_timeline_preview(
    timeline: &mut dyn TimelineElement,
    is_scrubbing: bool,
    pointer: PointerInput,
) -> EventDisposition {
    if !is_scrubbing {
        return EventDisposition::Ignored;
    }
    let ratio = seek_ratio(pointer.x, timeline.bounding_rect());
    trace!(ratio = ratio.value(), "scrub preview");
    timeline.set_progress(ratio);
    EventDisposition::Consumed
}

/// Re-evaluates the scrub gesture against a pointer event.
///
/// Starting a scrub pauses playback. Finishing one seeks to the pointer
/// position and resumes playback if it was running when the scrub began.
pub fn toggle_scrubbing(
    timeline: &dyn TimelineElement,
    container: &mut dyn ContainerElement,
    media: &mut dyn MediaElement,
    gesture: &mut ScrubGesture,
    pointer: PointerInput,
) -> ScrubTransition {
    let ratio = seek_ratio(pointer.x, timeline.bounding_rect());
    let transition = gesture.update(pointer.buttons, media.is_paused());
    container.set_class(ContainerClass::Scrubbing, gesture.is_scrubbing());

    match transition {
        ScrubTransition::Started => {
            debug!(was_paused = gesture.was_paused(), "scrub started");
            media.pause();
        }
        ScrubTransition::Finished { resume } => {
            let duration = media.duration();
            if duration.is_finite() {
                let target = ratio.to_position(duration);
                debug!(target, resume, "scrub committed");
                media.set_current_time(target);
            } else {
                debug!(resume, "scrub released before duration is known");
            }
            if resume {
                media.play();
            }
        }
        ScrubTransition::Unchanged => {}
    }
    transition
}

/// Writes the current time label and, unless `preview_active`, the bar fill.
///
/// The fill is left alone during a scrub so the preview is not overwritten.
pub fn update_time_display(
    media: &dyn MediaElement,
    current_time_label: &mut dyn TextElement,
    timeline: &mut dyn TimelineElement,
    preview_active: bool,
) {
    let current = media.current_time();
    current_time_label.set_text(&format_duration(current));
    if !preview_active {
        timeline.set_progress(ProgressRatio::of_position(current, media.duration()));
    }
}

/// Writes the total duration label.
pub fn update_total_time(media: &dyn MediaElement, total_time_label: &mut dyn TextElement) {
    total_time_label.set_text(&format_duration(media.duration()));
}

// =============================================================================
// Playback
// =============================================================================

/// Plays if paused, pauses otherwise.
pub fn toggle_play(media: &mut dyn MediaElement) {
    if media.is_paused() {
        media.play();
    } else {
        media.pause();
    }
}

/// Jumps by `delta_secs` (negative to rewind), staying inside the media.
pub fn skip_time(media: &mut dyn MediaElement, delta_secs: f64) {
    let target = media.current_time() + delta_secs;
    let duration = media.duration();
    let target = if duration.is_finite() && duration > 0.0 {
        target.clamp(0.0, duration)
    } else {
        target.max(0.0)
    };
    media.set_current_time(target);
}

/// Mirrors the media's play/pause status into the `paused` class.
pub fn set_play_pause_icon(container: &mut dyn ContainerElement, status: PlayStatus) {
    container.set_class(ContainerClass::Paused, !status.is_playing());
}

/// Advances the playback rate one step of the speed cycle and updates the
/// speed button caption.
pub fn change_playback_speed(
    media: &mut dyn MediaElement,
    speed_button: &mut dyn TextElement,
) -> PlaybackRate {
    let rate = PlaybackRate::new(media.playback_rate()).next();
    media.set_playback_rate(rate.value());
    speed_button.set_text(&rate.label());
    debug!(rate = rate.value(), "playback rate changed");
    rate
}

// =============================================================================
// Volume
// =============================================================================

/// Flips the mute flag. The icon shows `muted` or `high` and the slider
/// jumps to 0 or 1; the volume itself is kept.
pub fn toggle_mute(
    container: &mut dyn ContainerElement,
    media: &mut dyn MediaElement,
    volume_slider: &mut dyn SliderElement,
) -> VolumeLevel {
    let muted = !media.is_muted();
    media.set_muted(muted);

    let level = VolumeLevel::from_mute_toggle(muted);
    volume_slider.set_value(if muted { 0.0 } else { 1.0 });
    container.set_volume_level(level);
    level
}

/// Live slider movement: sets the volume, muting at zero.
pub fn on_volume_input(media: &mut dyn MediaElement, value: Volume) {
    media.set_volume(value.value());
    media.set_muted(value.is_silent());
}

/// Slider committed: sets the volume and recomputes the icon bucket.
///
/// A muted or silent player forces the slider back to zero.
pub fn on_volume_change(
    container: &mut dyn ContainerElement,
    media: &mut dyn MediaElement,
    volume_slider: &mut dyn SliderElement,
    value: Volume,
) -> VolumeLevel {
    volume_slider.set_value(value.value());
    media.set_volume(value.value());

    let level = VolumeLevel::from_volume(Volume::new(media.volume()), media.is_muted());
    if level == VolumeLevel::Muted {
        volume_slider.set_value(0.0);
    }
    container.set_volume_level(level);
    level
}

// =============================================================================
// Captions
// =============================================================================

/// Outcome of a captions toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionToggle {
    /// The primary track switched to this mode.
    Toggled(TextTrackMode),
    /// The media has no text track; nothing changed.
    Unavailable,
}

/// Mode of the track the captions button drives, if there is one.
#[must_use]
pub fn caption_track_mode(media: &dyn MediaElement) -> Option<TextTrackMode> {
    media.text_track_mode(PRIMARY_TEXT_TRACK)
}

/// Shows or hides the primary text track and mirrors it into the `captions` class.
///
/// Only the first track is touched; other tracks keep their modes.
pub fn toggle_captions(
    container: &mut dyn ContainerElement,
    media: &mut dyn MediaElement,
) -> CaptionToggle {
    let Some(mode) = caption_track_mode(media) else {
        debug!("captions toggle ignored: no text track");
        return CaptionToggle::Unavailable;
    };

    let mode = mode.toggled();
    media.set_text_track_mode(PRIMARY_TEXT_TRACK, mode);
    container.set_class(ContainerClass::Captions, mode.is_showing());
    CaptionToggle::Toggled(mode)
}

// =============================================================================
// Presentation modes
// =============================================================================

/// Runs the transition table for `request` and performs the chosen commands.
///
/// Returns the commands issued; an empty list means the request was ignored
/// in the current mode.
pub fn apply_presentation(
    request: PresentationRequest,
    presentation: &mut PresentationState,
    container: &mut dyn ContainerElement,
    media: &mut dyn MediaElement,
    document: &mut dyn Document,
) -> Vec<PresentationCommand> {
    let commands = presentation.plan(request);
    if commands.is_empty() {
        debug!(?request, mode = ?presentation.mode(), "presentation request ignored");
    }

    for command in &commands {
        debug!(?command, "presentation command");
        match *command {
            PresentationCommand::SetTheater(on) => container.set_class(ContainerClass::Theater, on),
            PresentationCommand::RequestFullscreen => container.request_fullscreen(),
            PresentationCommand::ExitFullscreen => document.exit_fullscreen(),
            PresentationCommand::RequestPictureInPicture => media.request_picture_in_picture(),
            PresentationCommand::ExitPictureInPicture => document.exit_picture_in_picture(),
        }
        presentation.apply_immediate(*command);
    }
    commands
}

/// Reconciles the `full-screen` class with the document after a
/// fullscreen change, whoever triggered it.
pub fn sync_fullscreen_class(
    container: &mut dyn ContainerElement,
    document: &dyn Document,
    presentation: &mut PresentationState,
) -> bool {
    let fullscreen = document.has_fullscreen_element();
    presentation.fullscreen = fullscreen;
    container.set_class(ContainerClass::FullScreen, fullscreen);
    fullscreen
}

/// Reconciles the `mini-player` class after the media entered or left
/// picture-in-picture.
pub fn sync_mini_player_class(
    container: &mut dyn ContainerElement,
    presentation: &mut PresentationState,
    active: bool,
) {
    presentation.picture_in_picture = active;
    container.set_class(ContainerClass::MiniPlayer, active);
}
