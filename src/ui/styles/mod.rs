// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the control bar widgets.

pub mod button;
pub mod container;
pub mod slider;
pub mod tooltip;
