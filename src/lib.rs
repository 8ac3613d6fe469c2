// SPDX-License-Identifier: MPL-2.0
//! `ws_video_player` is the control surface of a web-style video player.
//!
//! It wires play/pause, seeking and scrubbing, volume, playback speed,
//! captions and the theater, mini-player and fullscreen presentation modes
//! onto a media element and its page through the platform ports in
//! [`application::port`]. An in-memory platform ([`infrastructure::memory`])
//! backs the tests and the iced demo window in [`app`].

pub mod app;
pub mod application;
pub mod config;
pub mod control_surface;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
