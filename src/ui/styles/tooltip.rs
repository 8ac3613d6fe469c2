// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the control bar.
//!
//! The bar is always dark, so tooltips are light regardless of the theme.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Light bubble with a soft shadow.
pub fn bubble(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::TOOLTIP)),
        text_color: Some(palette::BAR),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip shown above it.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::TOOLTIP))
        .padding([spacing::XXS, spacing::XS])
        .style(bubble);

    tooltip(content, tip, tooltip::Position::Top).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_ignores_theme() {
        assert_eq!(bubble(&Theme::Light), bubble(&Theme::Dark));
    }

    #[test]
    fn bubble_contrasts_with_bar() {
        let style = bubble(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r > palette::BAR.r);
    }
}
