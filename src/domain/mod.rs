// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core player logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: Container classes, input values and the presentation mode
//!   state machine ([`PresentationMode`](ui::PresentationMode))
//! - [`video`]: Playback value objects ([`PlaybackRate`](video::PlaybackRate),
//!   [`Volume`](video::Volume), [`VolumeLevel`](video::VolumeLevel)) and
//!   [`format_duration`](video::format_duration)

pub mod ui;
pub mod video;
