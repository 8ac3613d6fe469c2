// SPDX-License-Identifier: MPL-2.0
//! Localized tooltips, status lines and error messages.
//!
//! Strings live in embedded Fluent files under `assets/i18n/`. The locale is
//! picked from the `--lang` flag, then the saved settings, then the system
//! locale, and falls back to `en-US` when none of them is shipped.

pub mod fluent;

pub use fluent::I18n;
