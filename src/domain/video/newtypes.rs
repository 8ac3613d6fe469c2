// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use std::fmt;

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate bounds for the speed button cycle (0.25x to 2.0x).
pub mod rate_bounds {
    /// Lowest rate of the cycle, also the wrap target.
    pub const MIN: f64 = 0.25;
    /// Highest rate of the cycle before wrapping.
    pub const MAX: f64 = 2.0;
    /// Increment applied on each speed button press.
    pub const STEP: f64 = 0.25;
    /// Default playback rate (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Playback rate of the media element.
///
/// The speed button cycles through the half-open range (0, 2] in quarter
/// steps. A rate set by the host outside that grid is kept as-is; the
/// next press still adds one step and wraps once past the maximum.
///
/// # Example
///
/// ```
/// use ws_video_player::domain::video::PlaybackRate;
///
/// let rate = PlaybackRate::new(1.75);
/// assert_eq!(rate.next().value(), 2.0);
/// assert_eq!(rate.next().next().value(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a playback rate. Non-positive or non-finite values fall back to 1.0.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_finite() && rate > 0.0 {
            Self(rate)
        } else {
            Self(rate_bounds::DEFAULT)
        }
    }

    /// Returns the rate as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next rate of the speed cycle.
    #[must_use]
    pub fn next(self) -> Self {
        let next = self.0 + rate_bounds::STEP;
        if next > rate_bounds::MAX {
            Self(rate_bounds::MIN)
        } else {
            Self(next)
        }
    }

    /// Returns the speed button caption, e.g. `1x`, `1.25x`, `0.5x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", self.0)
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, the media element range).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f64 = 0.0;
    /// Maximum volume level.
    pub const MAX: f64 = 1.0;
    /// Volume at and above which the icon shows the "high" level.
    pub const HIGH_THRESHOLD: f64 = 0.5;
}

/// Volume level, guaranteed to be within the media element range (0.0–1.0).
///
/// # Example
///
/// ```
/// use ws_video_player::domain::video::Volume;
///
/// assert_eq!(Volume::new(1.7).value(), 1.0);
/// assert_eq!(Volume::new(-0.2).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    /// NaN maps to silence.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Parses a slider value (`"0.35"`). Unparsable input maps to silence.
    #[must_use]
    pub fn parse_slider(value: &str) -> Self {
        Self::new(value.trim().parse::<f64>().unwrap_or(volume_bounds::MIN))
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true for exact silence.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::MAX)
    }
}

// =============================================================================
// VolumeLevel
// =============================================================================

/// Icon bucket written to the container's `volumeLevel` data attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeLevel {
    /// Muted or zero volume.
    Muted,
    /// Audible, below the high threshold.
    Low,
    /// At or above the high threshold.
    #[default]
    High,
}

impl VolumeLevel {
    /// Buckets a slider-driven volume change.
    ///
    /// Muted or zero volume is `Muted`; volume at or above 0.5 is `High`;
    /// anything else is `Low`.
    #[must_use]
    pub fn from_volume(volume: Volume, muted: bool) -> Self {
        if muted || volume.is_silent() {
            Self::Muted
        } else if volume.value() >= volume_bounds::HIGH_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Level shown after the mute button: never `Low`.
    #[must_use]
    pub fn from_mute_toggle(muted: bool) -> Self {
        if muted {
            Self::Muted
        } else {
            Self::High
        }
    }

    /// Value of the data attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Muted => "muted",
            Self::Low => "low",
            Self::High => "high",
        }
    }

    /// Parses a data attribute value.
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "muted" => Some(Self::Muted),
            "low" => Some(Self::Low),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SeekStep
// =============================================================================

/// Keyboard seek step bounds (1 to 30 seconds).
pub mod seek_step_bounds {
    /// Minimum keyboard seek step in seconds.
    pub const MIN: f64 = 1.0;
    /// Maximum keyboard seek step in seconds.
    pub const MAX: f64 = 30.0;
    /// Default keyboard seek step in seconds.
    pub const DEFAULT: f64 = 5.0;
}

/// Distance jumped by the arrow / `j` / `l` shortcuts, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep(f64);

impl SeekStep {
    /// Creates a new seek step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}

// =============================================================================
// ProgressRatio
// =============================================================================

/// Seek bar fill, always within [0, 1].
///
/// Drives the `--progress-position` custom property of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressRatio(f64);

impl ProgressRatio {
    /// Empty bar.
    pub const ZERO: Self = Self(0.0);

    /// Creates a ratio, clamping to [0, 1]. NaN maps to zero.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self::ZERO;
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    /// Ratio of a playback position within a duration.
    ///
    /// Unknown (NaN, infinite) or non-positive durations yield zero.
    #[must_use]
    pub fn of_position(position_secs: f64, duration_secs: f64) -> Self {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Self::ZERO;
        }
        Self::new(position_secs / duration_secs)
    }

    /// Returns the ratio as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Position in seconds this ratio points at.
    #[must_use]
    pub fn to_position(self, duration_secs: f64) -> f64 {
        self.0 * duration_secs
    }

    /// Value written to the custom property.
    #[must_use]
    pub fn css_value(self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn rate_cycle_has_length_eight() {
        let start = PlaybackRate::new(0.25);
        let mut rate = start;
        let mut seen = Vec::new();
        for _ in 0..8 {
            rate = rate.next();
            seen.push(rate.value());
        }
        assert_eq!(rate, start);
        assert_eq!(seen, vec![0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 0.25]);
    }

    #[test]
    fn rate_never_reaches_zero() {
        let mut rate = PlaybackRate::default();
        for _ in 0..32 {
            rate = rate.next();
            assert!(rate.value() > 0.0);
            assert!(rate.value() <= rate_bounds::MAX);
        }
    }

    #[test]
    fn rate_off_grid_still_wraps() {
        assert_abs_diff_eq!(PlaybackRate::new(1.9).next().value(), 0.25);
        assert_abs_diff_eq!(PlaybackRate::new(1.1).next().value(), 1.35);
    }

    #[test]
    fn rate_invalid_input_falls_back_to_normal() {
        assert_eq!(PlaybackRate::new(0.0), PlaybackRate::default());
        assert_eq!(PlaybackRate::new(f64::NAN), PlaybackRate::default());
        assert_eq!(PlaybackRate::new(-1.0), PlaybackRate::default());
    }

    #[test]
    fn rate_label_drops_trailing_zeroes() {
        assert_eq!(PlaybackRate::new(1.0).label(), "1x");
        assert_eq!(PlaybackRate::new(1.25).label(), "1.25x");
        assert_eq!(PlaybackRate::new(0.5).label(), "0.5x");
        assert_eq!(PlaybackRate::new(2.0).label(), "2x");
    }

    #[test]
    fn volume_clamps_to_media_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), 0.0);
        assert_abs_diff_eq!(Volume::new(1.5).value(), 1.0);
        assert_abs_diff_eq!(Volume::new(0.3).value(), 0.3);
        assert_abs_diff_eq!(Volume::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn volume_parses_slider_values() {
        assert_abs_diff_eq!(Volume::parse_slider("0.35").value(), 0.35);
        assert_abs_diff_eq!(Volume::parse_slider(" 1 ").value(), 1.0);
        assert!(Volume::parse_slider("loud").is_silent());
    }

    #[test]
    fn volume_level_boundaries() {
        assert_eq!(
            VolumeLevel::from_volume(Volume::new(0.0), false),
            VolumeLevel::Muted
        );
        assert_eq!(
            VolumeLevel::from_volume(Volume::new(0.8), true),
            VolumeLevel::Muted
        );
        assert_eq!(
            VolumeLevel::from_volume(Volume::new(0.01), false),
            VolumeLevel::Low
        );
        assert_eq!(
            VolumeLevel::from_volume(Volume::new(0.49), false),
            VolumeLevel::Low
        );
        assert_eq!(
            VolumeLevel::from_volume(Volume::new(0.5), false),
            VolumeLevel::High
        );
        assert_eq!(
            VolumeLevel::from_volume(Volume::new(1.0), false),
            VolumeLevel::High
        );
    }

    #[test]
    fn mute_toggle_level_is_never_low() {
        assert_eq!(VolumeLevel::from_mute_toggle(true), VolumeLevel::Muted);
        assert_eq!(VolumeLevel::from_mute_toggle(false), VolumeLevel::High);
    }

    #[test]
    fn volume_level_attribute_round_trips() {
        for level in [VolumeLevel::Muted, VolumeLevel::Low, VolumeLevel::High] {
            assert_eq!(VolumeLevel::from_attribute(level.as_str()), Some(level));
        }
        assert_eq!(VolumeLevel::from_attribute("loud"), None);
    }

    #[test]
    fn seek_step_clamps() {
        assert_abs_diff_eq!(SeekStep::new(0.0).value(), seek_step_bounds::MIN);
        assert_abs_diff_eq!(SeekStep::new(90.0).value(), seek_step_bounds::MAX);
        assert_abs_diff_eq!(SeekStep::default().value(), 5.0);
    }

    #[test]
    fn progress_ratio_of_position() {
        assert_abs_diff_eq!(ProgressRatio::of_position(30.0, 120.0).value(), 0.25);
        assert_abs_diff_eq!(ProgressRatio::of_position(150.0, 120.0).value(), 1.0);
        assert_eq!(ProgressRatio::of_position(10.0, 0.0), ProgressRatio::ZERO);
        assert_eq!(ProgressRatio::of_position(10.0, f64::NAN), ProgressRatio::ZERO);
        assert_eq!(
            ProgressRatio::of_position(10.0, f64::INFINITY),
            ProgressRatio::ZERO
        );
    }

    #[test]
    fn progress_ratio_css_value() {
        assert_eq!(ProgressRatio::new(0.5).css_value(), "0.5");
        assert_eq!(ProgressRatio::new(1.0).css_value(), "1");
        assert_eq!(ProgressRatio::ZERO.css_value(), "0");
    }
}
