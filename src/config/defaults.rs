// SPDX-License-Identifier: MPL-2.0
//! Player defaults and the bounds the settings file is clamped to.
//!
//! Everything tunable lives here so the player, the view and the settings
//! loader agree on the same numbers.
//!
//! # Categories
//!
//! - **Keyboard**: Arrow / `j` / `l` seek step
//! - **Playback rate**: Speed button cycle
//! - **Volume**: Initial volume and icon threshold
//! - **Captions**: Default caption track labelling
//! - **Demo**: Simulated clock of the demo application

use crate::domain::video::newtypes::{rate_bounds, seek_step_bounds, volume_bounds};

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Default keyboard seek step (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = seek_step_bounds::DEFAULT;

/// Minimum keyboard seek step (in seconds).
pub const MIN_SEEK_STEP_SECS: f64 = seek_step_bounds::MIN;

/// Maximum keyboard seek step (in seconds).
pub const MAX_SEEK_STEP_SECS: f64 = seek_step_bounds::MAX;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Increment applied by the speed button.
pub const PLAYBACK_RATE_STEP: f64 = rate_bounds::STEP;

/// Rate the speed button wraps to.
pub const MIN_PLAYBACK_RATE: f64 = rate_bounds::MIN;

/// Highest rate of the speed button cycle.
pub const MAX_PLAYBACK_RATE: f64 = rate_bounds::MAX;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Initial playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f64 = volume_bounds::MAX;

/// Volume at and above which the icon shows the "high" level.
pub const VOLUME_HIGH_THRESHOLD: f64 = volume_bounds::HIGH_THRESHOLD;

// ==========================================================================
// Caption Defaults
// ==========================================================================

/// Default caption track language (`srclang`).
pub const DEFAULT_CAPTION_SRC_LANG: &str = "en";

/// Default caption track label shown in the platform menu.
pub const DEFAULT_CAPTION_LANG_LABEL: &str = "English";

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Interval of the demo application's simulated media clock (in milliseconds).
pub const DEMO_TICK_MS: u64 = 250;

/// Duration of the simulated media in the demo application (in seconds).
pub const DEMO_DURATION_SECS: f64 = 634.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Seek step validation
    assert!(MIN_SEEK_STEP_SECS > 0.0);
    assert!(MAX_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);

    // Rate cycle validation
    assert!(MIN_PLAYBACK_RATE > 0.0);
    assert!(PLAYBACK_RATE_STEP > 0.0);
    assert!(MAX_PLAYBACK_RATE > MIN_PLAYBACK_RATE);

    // Volume validation
    assert!(DEFAULT_VOLUME >= 0.0);
    assert!(DEFAULT_VOLUME <= 1.0);
    assert!(VOLUME_HIGH_THRESHOLD > 0.0);
    assert!(VOLUME_HIGH_THRESHOLD < 1.0);

    // Demo validation
    assert!(DEMO_TICK_MS > 0);
    assert!(DEMO_DURATION_SECS > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_step_defaults_are_valid() {
        assert_eq!(DEFAULT_SEEK_STEP_SECS, 5.0);
        assert!(DEFAULT_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
        assert!(DEFAULT_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);
    }

    #[test]
    fn rate_cycle_is_a_whole_number_of_steps() {
        let steps = (MAX_PLAYBACK_RATE - MIN_PLAYBACK_RATE) / PLAYBACK_RATE_STEP;
        assert_eq!(steps, steps.round());
        assert_eq!(steps, 7.0);
    }

    #[test]
    fn caption_defaults() {
        assert_eq!(DEFAULT_CAPTION_SRC_LANG, "en");
        assert_eq!(DEFAULT_CAPTION_LANG_LABEL, "English");
    }
}
