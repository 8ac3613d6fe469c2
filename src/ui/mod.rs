// SPDX-License-Identifier: MPL-2.0
//! User interface of the demo window: design tokens, widget styles and the
//! video control bar.

pub mod design_tokens;
pub mod styles;
pub mod video_controls;
