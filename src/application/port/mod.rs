// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that platform adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of any concrete platform (browser DOM, desktop toolkit, tests).
//!
//! # Available Ports
//!
//! - [`dom`]: Document, container, seek bar, labels and volume slider
//! - [`media`]: The native media playback element
//!
//! # Design Notes
//!
//! - All traits use domain types only (no toolkit handles)
//! - Handles behave like DOM nodes: cheap to clone, shared, single-threaded
//! - Platform requests are fire-and-forget and return `()`; outcomes arrive
//!   later as events
//!
//! # Example
//!
//! ```ignore
//! use ws_video_player::application::port::MediaElement;
//!
//! fn rewind(media: &mut dyn MediaElement) {
//!     media.set_current_time(0.0);
//! }
//! ```

pub mod dom;
pub mod media;

// Re-export main types for convenience
pub use dom::{
    ContainerElement, Document, DocumentEvent, EventDisposition, ListenerId, ListenerKind,
    SliderElement, TextElement, TimelineElement,
};
pub use media::{MediaElement, MediaEvent, TextTrackMode};
