// SPDX-License-Identifier: MPL-2.0
//! Window layout: the video surface above the control bar.

use super::Message;
use crate::control_surface::ControlsSnapshot;
use crate::domain::ui::PresentationMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{styles, video_controls};
use iced::widget::{center, column, container, text};
use iced::{Color, Element, Length};

pub(super) struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub video_src: &'a str,
    pub accent: Color,
    pub seek_step_secs: f64,
    /// Startup error, shown instead of the player.
    pub error: Option<&'a str>,
}

/// Width of the video surface for a presentation mode.
pub(super) fn surface_width(mode: PresentationMode) -> Length {
    match mode {
        PresentationMode::Inline => Length::Fixed(sizing::VIDEO_INLINE_WIDTH),
        PresentationMode::MiniPlayer => Length::Fixed(sizing::VIDEO_MINI_WIDTH),
        PresentationMode::Theater | PresentationMode::FullScreen => Length::Fill,
    }
}

fn status_key(snapshot: &ControlsSnapshot) -> &'static str {
    match snapshot.mode {
        PresentationMode::MiniPlayer => "status-mini-player",
        PresentationMode::FullScreen => "status-full-screen",
        PresentationMode::Theater => "status-theater",
        PresentationMode::Inline if snapshot.is_playing() => "status-playing",
        PresentationMode::Inline => "status-paused",
    }
}

pub(super) fn view<'a>(
    ctx: ViewContext<'a>,
    snapshot: Option<&ControlsSnapshot>,
) -> Element<'a, Message> {
    let (Some(snapshot), None) = (snapshot, ctx.error) else {
        let message = ctx.error.unwrap_or_default().to_string();
        return center(text(message).size(typography::BODY)).into();
    };

    let label = column![
        text(ctx.video_src.to_string()).size(typography::TITLE),
        text(ctx.i18n.tr(status_key(snapshot))).size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .align_x(iced::Alignment::Center);

    let surface = container(center(label))
        .width(surface_width(snapshot.mode))
        .height(Length::Fill)
        .style(styles::container::video_surface);

    let controls = video_controls::view(
        video_controls::ViewContext {
            i18n: ctx.i18n,
            accent: ctx.accent,
            seek_step_secs: ctx.seek_step_secs,
        },
        snapshot,
    )
    .map(Message::Controls);

    column![
        container(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill),
        controls
    ]
    .spacing(spacing::XS)
    .padding(spacing::MD)
    .into()
}
