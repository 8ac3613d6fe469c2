// SPDX-License-Identifier: MPL-2.0
//! Video player control bar.
//!
//! Renders a [`ControlsSnapshot`] as a row of buttons around a seek bar:
//! play/pause, skip back/forward, the time display, mute and volume, the
//! speed button, captions and the three presentation toggles.

use crate::control_surface::ControlsSnapshot;
use crate::domain::ui::PresentationMode;
use crate::domain::video::VolumeLevel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, slider, text, Space};
use iced::{Color, Element, Length};

/// Seek bar resolution, as a fraction of the duration.
const SEEK_SLIDER_STEP: f64 = 0.0005;

/// Volume slider resolution.
const VOLUME_SLIDER_STEP: f64 = 0.01;

/// Button glyphs.
mod glyph {
    pub const PLAY: &str = "▶";
    pub const PAUSE: &str = "⏸";
    pub const SKIP_BACKWARD: &str = "⏪";
    pub const SKIP_FORWARD: &str = "⏩";
    pub const VOLUME_HIGH: &str = "🔊";
    pub const VOLUME_LOW: &str = "🔉";
    pub const VOLUME_MUTED: &str = "🔇";
    pub const CAPTIONS: &str = "CC";
    pub const MINI_PLAYER: &str = "⧉";
    pub const THEATER: &str = "▭";
    pub const FULL_SCREEN: &str = "⛶";
}

/// Messages emitted by the control bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlay,

    /// Seek bar dragged to this ratio of the duration.
    SeekPreview(f64),

    /// Seek bar released.
    SeekCommit,

    SkipBackward,
    SkipForward,
    ChangePlaybackSpeed,
    ToggleMute,

    /// Volume slider moved (0.0 to 1.0).
    VolumeInput(f64),

    /// Volume slider released.
    VolumeCommit,

    ToggleCaptions,
    ToggleMiniPlayer,
    ToggleTheater,
    ToggleFullScreen,
}

/// View context for rendering the control bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Seek bar and active button colour, from the player's accent option.
    pub accent: Color,
    pub seek_step_secs: f64,
}

/// Parses a host-supplied accent colour (`#rrggbb`, `#rgb`, `#rrggbbaa`).
///
/// Falls back to the default accent when absent or unparsable.
#[must_use]
pub fn accent_color(value: Option<&str>) -> Color {
    value
        .and_then(|raw| raw.parse::<Color>().ok())
        .unwrap_or(palette::ACCENT)
}

/// Glyph for the volume button.
fn volume_glyph(level: VolumeLevel) -> &'static str {
    match level {
        VolumeLevel::High => glyph::VOLUME_HIGH,
        VolumeLevel::Low => glyph::VOLUME_LOW,
        VolumeLevel::Muted => glyph::VOLUME_MUTED,
    }
}

fn control_button<'a>(
    label: impl Into<String>,
    message: Option<Message>,
    active: Option<Color>,
) -> Element<'a, Message> {
    let content = text(label.into())
        .size(typography::BODY)
        .align_y(iced::alignment::Vertical::Center);
    let mut control = button(content)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    if let Some(message) = message {
        control = control.on_press(message);
    }

    match active {
        Some(accent) => control.style(styles::button::selected(accent)).into(),
        None => control.style(styles::button::control).into(),
    }
}

fn with_tooltip<'a>(content: Element<'a, Message>, tip: String) -> Element<'a, Message> {
    styles::tooltip::styled(content, tip).into()
}

/// Seek bar spanning the full control bar width.
fn timeline<'a>(accent: Color, snapshot: &ControlsSnapshot) -> Element<'a, Message> {
    slider(0.0..=1.0, snapshot.progress.value(), Message::SeekPreview)
        .on_release(Message::SeekCommit)
        .step(SEEK_SLIDER_STEP)
        .width(Length::Fill)
        .style(styles::slider::accent(accent, snapshot.scrubbing))
        .into()
}

/// Renders the control bar for `snapshot`.
pub fn view<'a>(ctx: ViewContext<'a>, snapshot: &ControlsSnapshot) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let seconds = format!("{}", ctx.seek_step_secs);

    let (play_glyph, play_tip) = if snapshot.is_playing() {
        (glyph::PAUSE, i18n.tr("tooltip-pause"))
    } else {
        (glyph::PLAY, i18n.tr("tooltip-play"))
    };
    let play = with_tooltip(
        control_button(play_glyph, Some(Message::TogglePlay), None),
        play_tip,
    );

    let skip_backward = with_tooltip(
        control_button(glyph::SKIP_BACKWARD, Some(Message::SkipBackward), None),
        i18n.tr_with_args("tooltip-seek-backward", &[("seconds", &seconds)]),
    );
    let skip_forward = with_tooltip(
        control_button(glyph::SKIP_FORWARD, Some(Message::SkipForward), None),
        i18n.tr_with_args("tooltip-seek-forward", &[("seconds", &seconds)]),
    );

    let time_display = text(format!(
        "{} / {}",
        snapshot.current_time_label(),
        snapshot.total_time_label()
    ))
    .size(typography::TIME);

    let mute_tip = if snapshot.muted {
        i18n.tr("tooltip-unmute")
    } else {
        i18n.tr("tooltip-mute")
    };
    let mute = with_tooltip(
        control_button(
            volume_glyph(snapshot.volume_level),
            Some(Message::ToggleMute),
            None,
        ),
        mute_tip,
    );
    let volume = slider(0.0..=1.0, snapshot.slider_value(), Message::VolumeInput)
        .on_release(Message::VolumeCommit)
        .step(VOLUME_SLIDER_STEP)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
        .style(styles::slider::accent(ctx.accent, false));

    let speed = with_tooltip(
        control_button(
            snapshot.speed_label(),
            Some(Message::ChangePlaybackSpeed),
            None,
        ),
        i18n.tr("tooltip-speed"),
    );

    let captions = if snapshot.captions_available() {
        with_tooltip(
            control_button(
                glyph::CAPTIONS,
                Some(Message::ToggleCaptions),
                snapshot.captions_showing().then_some(ctx.accent),
            ),
            i18n.tr("tooltip-captions"),
        )
    } else {
        with_tooltip(
            control_button(glyph::CAPTIONS, None, None),
            i18n.tr("tooltip-captions-unavailable"),
        )
    };

    let mode = snapshot.mode;
    let mini_player = with_tooltip(
        control_button(
            glyph::MINI_PLAYER,
            Some(Message::ToggleMiniPlayer),
            (mode == PresentationMode::MiniPlayer).then_some(ctx.accent),
        ),
        i18n.tr("tooltip-mini-player"),
    );
    let theater_tip = if snapshot.theater {
        i18n.tr("tooltip-theater-exit")
    } else {
        i18n.tr("tooltip-theater")
    };
    let theater = with_tooltip(
        control_button(
            glyph::THEATER,
            Some(Message::ToggleTheater),
            snapshot.theater.then_some(ctx.accent),
        ),
        theater_tip,
    );
    let full_screen_tip = if mode == PresentationMode::FullScreen {
        i18n.tr("tooltip-full-screen-exit")
    } else {
        i18n.tr("tooltip-full-screen")
    };
    let full_screen = with_tooltip(
        control_button(
            glyph::FULL_SCREEN,
            Some(Message::ToggleFullScreen),
            (mode == PresentationMode::FullScreen).then_some(ctx.accent),
        ),
        full_screen_tip,
    );

    let buttons = row![
        play,
        skip_backward,
        skip_forward,
        mute,
        volume,
        time_display,
        Space::new().width(Length::Fill),
        captions,
        speed,
        mini_player,
        theater,
        full_screen,
    ]
    .spacing(spacing::XS)
    .align_y(iced::Alignment::Center);

    container(column![timeline(ctx.accent, snapshot), buttons].spacing(spacing::XXS))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::control_bar)
        .into()
}
