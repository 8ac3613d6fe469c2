// SPDX-License-Identifier: MPL-2.0
//! Control bar button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Transparent control bar button; the hover tint follows the theme.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::HOVER,
        button::Status::Pressed => opacity::PRESSED,
        _ => opacity::NONE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..palette::TEXT })),
        text_color: palette::TEXT,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for an active toggle (captions on, theater, mini-player, full screen).
/// Uses the player's accent colour.
pub fn selected(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::ACCENT_HOVER,
                ..accent
            },
            _ => accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::TEXT,
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}
