// SPDX-License-Identifier: MPL-2.0
//! Application layer - player behaviors and the ports they drive.
//!
//! - [`port`]: Trait definitions for the media element, the page elements
//!   and the host document
//! - [`behavior`]: Stateless operations over those ports
//! - [`keyboard`]: Shortcut table
//! - [`scrub`]: Seek bar drag gesture
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The control surface wires behaviors to events

pub mod behavior;
pub mod keyboard;
pub mod port;
pub mod scrub;
