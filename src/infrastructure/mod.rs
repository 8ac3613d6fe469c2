// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory`]: In-memory document and elements (implements every port)
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Handles are single-threaded and cheap to clone
//! - Platform refusals are configurable so tests can exercise them

pub mod memory;

// Re-export main types for convenience
pub use memory::{
    MemoryContainer, MemoryDocument, MemoryMedia, MemoryPlayer, MemorySlider, MemoryText,
    MemoryTimeline,
};
