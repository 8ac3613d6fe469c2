// SPDX-License-Identifier: MPL-2.0
//! UI-facing domain types.
//!
//! These describe the visual hooks the stylesheet reads (container classes),
//! the presentation mode state machine, and the raw input values delivered
//! by the platform (keys, pointer buttons, geometry).

pub mod container;
pub mod input;
pub mod presentation;

pub use container::ContainerClass;
pub use input::{FocusKind, KeyboardInput, Modifiers, PointerButtons, PointerInput, Rect};
pub use presentation::{
    PresentationCommand, PresentationMode, PresentationRequest, PresentationState,
};
