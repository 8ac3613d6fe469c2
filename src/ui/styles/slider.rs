// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Seek bar and volume slider: accent fill, translucent remainder.
///
/// The track thickens while `active` (scrubbing).
pub fn accent(accent: Color, active: bool) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |_theme: &Theme, status: slider::Status| {
        let width = if active || status == slider::Status::Dragged {
            sizing::TIMELINE_TRACK_ACTIVE
        } else {
            sizing::TIMELINE_TRACK
        };
        let remainder = Color {
            a: opacity::TRACK,
            ..palette::TRACK
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (Background::Color(accent), Background::Color(remainder)),
                width,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: (width / 2.0).into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle {
                    radius: sizing::SCRUBBER_THUMB / 2.0,
                },
                background: Background::Color(accent),
                border_width: 0.0,
                border_color: Color::TRANSPARENT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_thickens_while_scrubbing() {
        let idle = accent(palette::ACCENT, false)(&Theme::Dark, slider::Status::Active);
        let scrubbing = accent(palette::ACCENT, true)(&Theme::Dark, slider::Status::Active);
        assert!(scrubbing.rail.width > idle.rail.width);
    }
}
