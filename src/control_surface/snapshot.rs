// SPDX-License-Identifier: MPL-2.0
//! Read-only view of a player for rendering.

use crate::application::port::TextTrackMode;
use crate::domain::ui::PresentationMode;
use crate::domain::video::{
    format_duration, PlayStatus, PlaybackRate, ProgressRatio, Volume, VolumeLevel,
};

/// Everything a control bar needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsSnapshot {
    pub status: PlayStatus,
    pub current_time: f64,
    /// NaN until the media has loaded.
    pub duration: f64,
    /// Bar fill: the scrub preview while scrubbing, the playback position otherwise.
    pub progress: ProgressRatio,
    pub volume: Volume,
    pub muted: bool,
    pub volume_level: VolumeLevel,
    pub playback_rate: PlaybackRate,
    /// Mode of the primary text track, `None` without captions.
    pub captions: Option<TextTrackMode>,
    pub mode: PresentationMode,
    /// Theater layout flag, kept while the mini-player is open.
    pub theater: bool,
    pub scrubbing: bool,
}

impl ControlsSnapshot {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    #[must_use]
    pub fn current_time_label(&self) -> String {
        format_duration(self.current_time)
    }

    #[must_use]
    pub fn total_time_label(&self) -> String {
        format_duration(self.duration)
    }

    #[must_use]
    pub fn speed_label(&self) -> String {
        self.playback_rate.label()
    }

    #[must_use]
    pub fn captions_available(&self) -> bool {
        self.captions.is_some()
    }

    #[must_use]
    pub fn captions_showing(&self) -> bool {
        self.captions.is_some_and(TextTrackMode::is_showing)
    }

    /// Slider position: zero while muted.
    #[must_use]
    pub fn slider_value(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume.value()
        }
    }
}
