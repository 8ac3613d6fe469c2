// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects and enums that are
//! independent of any presentation or platform concerns.

pub mod newtypes;
pub mod playback;
pub mod time_format;

// Re-export commonly used types
pub use newtypes::{PlaybackRate, ProgressRatio, SeekStep, Volume, VolumeLevel};
pub use playback::PlayStatus;
pub use time_format::format_duration;
