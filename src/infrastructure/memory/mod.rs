// SPDX-License-Identifier: MPL-2.0
//! In-memory platform.
//!
//! Handles are `Rc<RefCell<_>>` wrappers that clone like DOM node
//! references: every clone sees the same element. The document queues the
//! notifications a browser would fire (`fullscreenchange`,
//! `enterpictureinpicture`, `timeupdate`, ...) until the host drains them,
//! which makes event ordering explicit in tests.

mod document;
mod elements;
mod media;
pub mod player;

pub use document::MemoryDocument;
pub use elements::{MemoryContainer, MemorySlider, MemoryText, MemoryTimeline};
pub use media::MemoryMedia;
pub use player::MemoryPlayer;
