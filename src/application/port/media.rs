// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the native playback
//! element the player wraps (an HTML `<video>`, or a toolkit equivalent).
//!
//! # Design Notes
//!
//! - The element is owned by the host; the player holds a handle for its
//!   attached lifetime
//! - Platform requests (`play`, `request_picture_in_picture`) are
//!   fire-and-forget: a refusal is handled by the platform and surfaces, if
//!   at all, as the absence of the matching media event
//! - Text tracks are addressed by index; the player only uses the primary
//!   (first) track

use std::fmt;

// =============================================================================
// TextTrackMode
// =============================================================================

/// Mode of a text track (`TextTrack.mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTrackMode {
    /// Not loaded, not rendered.
    #[default]
    Disabled,
    /// Loaded, cues not rendered.
    Hidden,
    /// Cues rendered over the video.
    Showing,
}

impl TextTrackMode {
    /// Mode after a captions toggle: anything not showing becomes showing.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Disabled | Self::Hidden => Self::Showing,
            Self::Showing => Self::Hidden,
        }
    }

    /// Returns true if cues are rendered.
    #[must_use]
    pub fn is_showing(self) -> bool {
        matches!(self, Self::Showing)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Hidden => "hidden",
            Self::Showing => "showing",
        }
    }
}

impl fmt::Display for TextTrackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MediaEvent
// =============================================================================

/// Notification fired by the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// First frame available; the duration is known.
    LoadedData,
    /// Playback position changed.
    TimeUpdate,
    Play,
    Pause,
    /// The video moved into a picture-in-picture window.
    EnterPictureInPicture,
    /// The picture-in-picture window closed.
    LeavePictureInPicture,
}

// =============================================================================
// MediaElement Trait
// =============================================================================

/// Port for the native media playback element.
///
/// Times are in seconds. `duration()` is NaN until metadata has loaded,
/// matching the platform.
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position. The platform clamps to the seekable range.
    fn set_current_time(&mut self, secs: f64);

    /// Total duration in seconds (NaN when unknown).
    fn duration(&self) -> f64;

    /// Returns true if playback is paused.
    fn is_paused(&self) -> bool;

    /// Requests playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Volume in [0, 1].
    fn volume(&self) -> f64;

    fn set_volume(&mut self, volume: f64);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);

    /// Number of text tracks attached to the element.
    fn text_track_count(&self) -> usize;

    /// Mode of the text track at `index`, if it exists.
    fn text_track_mode(&self, index: usize) -> Option<TextTrackMode>;

    /// Sets the mode of the text track at `index`. Out-of-range indices are ignored.
    fn set_text_track_mode(&mut self, index: usize, mode: TextTrackMode);

    /// Asks the platform to move the video into a picture-in-picture window.
    fn request_picture_in_picture(&mut self);

    /// Adds a host-supplied class to the element.
    fn add_custom_class(&mut self, class: &str);
}
