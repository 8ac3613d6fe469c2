// SPDX-License-Identifier: MPL-2.0
//! Demo window: one player on the in-memory platform, driven by an iced
//! control bar and the keyboard.
//!
//! The `App` struct owns the player and translates widget messages and key
//! presses into the DOM-style events the control surface listens to. The
//! document's fullscreen element is mirrored onto the real window.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::defaults::DEMO_DURATION_SECS;
use crate::config::{self, Config, PlayerOptions};
use crate::control_surface::ControlsSnapshot;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{MemoryDocument, MemoryPlayer};
use crate::ui::video_controls;
use iced::{window, Color, Element, Subscription, Task, Theme};
use std::fmt;
use tracing::{info, warn};

/// Video source used when neither the CLI nor the settings name one.
pub const DEMO_VIDEO_SRC: &str = "demo.webm";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    options: PlayerOptions,
    /// `None` when the player options were rejected.
    player: Option<MemoryPlayer>,
    error: Option<String>,
    accent: Color,
    window_id: Option<window::Id>,
    window_fullscreen: bool,
    seek_x: f64,
    pending_volume: f64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("video_src", &self.options.video_src)
            .field("has_player", &self.player.is_some())
            .field("window_fullscreen", &self.window_fullscreen)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are only consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Player options from the settings file, overridden by the CLI flags.
fn player_options(flags: &Flags, config: &Config) -> PlayerOptions {
    let mut options = config
        .player
        .clone()
        .unwrap_or_else(|| PlayerOptions::new(DEMO_VIDEO_SRC));

    if let Some(video) = &flags.video {
        options.video_src.clone_from(video);
    }
    if let Some(captions) = &flags.captions {
        options = options.with_captions(captions.clone());
    }
    if let Some(accent) = &flags.accent {
        options = options.with_accent_color(accent.clone());
    }
    options
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            warn!(%err, "could not read settings, using defaults");
            Config::default()
        });
        (Self::with_config(flags, config), Task::none())
    }

    /// Builds the app from an already loaded configuration.
    pub fn with_config(flags: Flags, config: Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let options = player_options(&flags, &config);
        let accent = video_controls::accent_color(options.accent_color.as_deref());

        let document = MemoryDocument::new();
        let (player, error) = match MemoryPlayer::from_config(
            &document,
            &config,
            options.clone(),
            DEMO_DURATION_SECS,
        ) {
            Ok(player) => {
                info!(video = %options.video_src, "player attached");
                (Some(player), None)
            }
            Err(err) => {
                warn!(%err, "player options rejected");
                (None, Some(i18n.tr_error(&err)))
            }
        };

        let pending_volume = config.initial_volume().value();
        Self {
            i18n,
            config,
            options,
            player,
            error,
            accent,
            window_id: None,
            window_fullscreen: false,
            seek_x: 0.0,
            pending_volume,
        }
    }

    /// Current player state, `None` when the options were rejected.
    #[must_use]
    pub fn snapshot(&self) -> Option<ControlsSnapshot> {
        self.player.as_ref().map(MemoryPlayer::snapshot)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.options.video_src)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let playing = self
            .player
            .as_ref()
            .is_some_and(|player| player.snapshot().is_playing());
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(playing),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let Some(player) = self.player.as_mut() else {
            return Task::none();
        };
        let mut ctx = update::UpdateContext {
            player,
            window_id: &mut self.window_id,
            window_fullscreen: &mut self.window_fullscreen,
            seek_x: &mut self.seek_x,
            pending_volume: &mut self.pending_volume,
        };
        update::handle(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        let snapshot = self.snapshot();
        view::view(
            view::ViewContext {
                i18n: &self.i18n,
                video_src: &self.options.video_src,
                accent: self.accent,
                seek_step_secs: self.config.seek_step().value(),
                error: self.error.as_deref(),
            },
            snapshot.as_ref(),
        )
    }
}
