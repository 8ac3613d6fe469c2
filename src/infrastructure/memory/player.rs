// SPDX-License-Identifier: MPL-2.0
//! One player wired to the in-memory platform.

use super::{
    MemoryContainer, MemoryDocument, MemoryMedia, MemorySlider, MemoryText, MemoryTimeline,
};
use crate::application::port::{DocumentEvent, EventDisposition};
use crate::config::{Config, PlayerOptions};
use crate::control_surface::{ControlSurface, ControlsSnapshot, Elements};
use crate::domain::ui::Rect;
use crate::error::Result;
use tracing::warn;

/// Upper bound on notification rounds per pump; a round may queue more.
const MAX_PUMP_ROUNDS: usize = 16;

/// Width of the simulated seek bar, in client pixels.
pub const TIMELINE_WIDTH: f64 = 1000.0;

/// A control surface plus the in-memory elements it drives.
///
/// The element fields are clones of the handles given to the surface, so
/// they observe every mutation. Notifications queued by the platform are
/// delivered by [`pump`](Self::pump).
#[derive(Debug)]
pub struct MemoryPlayer {
    surface: ControlSurface,
    pub document: MemoryDocument,
    pub media: MemoryMedia,
    pub container: MemoryContainer,
    pub timeline: MemoryTimeline,
    pub current_time: MemoryText,
    pub total_time: MemoryText,
    pub speed_button: MemoryText,
    pub volume_slider: MemorySlider,
}

impl MemoryPlayer {
    /// Builds a detached player for media of `duration_secs` in `document`.
    ///
    /// The media gets one caption track when `options` configure captions.
    pub fn new(
        document: &MemoryDocument,
        options: PlayerOptions,
        duration_secs: f64,
    ) -> Result<Self> {
        let tracks = usize::from(options.has_captions());
        let media = document.create_media(duration_secs).with_text_tracks(tracks);
        let container = document.create_container();
        let timeline = MemoryTimeline::new(Rect::new(0.0, 0.0, TIMELINE_WIDTH, 8.0));
        let current_time = MemoryText::new("0:00");
        let total_time = MemoryText::default();
        let speed_button = MemoryText::new("1x");
        let volume_slider = MemorySlider::new(1.0);

        let elements = Elements {
            media: Box::new(media.clone()),
            container: Box::new(container.clone()),
            timeline: Box::new(timeline.clone()),
            current_time: Box::new(current_time.clone()),
            total_time: Box::new(total_time.clone()),
            speed_button: Box::new(speed_button.clone()),
            volume_slider: Box::new(volume_slider.clone()),
            document: Box::new(document.clone()),
        };
        let surface = ControlSurface::new(elements, options)?;

        Ok(Self {
            surface,
            document: document.clone(),
            media,
            container,
            timeline,
            current_time,
            total_time,
            speed_button,
            volume_slider,
        })
    }

    /// Builds and attaches a player using the seek step and volume of `config`.
    pub fn from_config(
        document: &MemoryDocument,
        config: &Config,
        options: PlayerOptions,
        duration_secs: f64,
    ) -> Result<Self> {
        let mut player = Self::new(document, options, duration_secs)?;
        player.surface.set_seek_step(config.seek_step());
        player.surface.attach();
        player.surface.set_volume(config.initial_volume());
        player.pump();
        Ok(player)
    }

    #[must_use]
    pub fn surface(&self) -> &ControlSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut ControlSurface {
        &mut self.surface
    }

    #[must_use]
    pub fn snapshot(&self) -> ControlsSnapshot {
        self.surface.snapshot()
    }

    /// Delivers `event` to every document listener of its kind, then pumps.
    ///
    /// Returns `Consumed` if any listener consumed the event.
    pub fn dispatch(&mut self, event: &DocumentEvent) -> EventDisposition {
        let mut disposition = EventDisposition::Ignored;
        for id in self.document.listeners_for(event.kind()) {
            if self.surface.handle_document_event(id, event).is_consumed() {
                disposition = EventDisposition::Consumed;
            }
        }
        self.pump();
        disposition
    }

    /// Delivers queued document and media notifications until none are left.
    pub fn pump(&mut self) {
        for _ in 0..MAX_PUMP_ROUNDS {
            let document_events = self.document.take_pending();
            let media_events = self.media.take_events();
            if document_events.is_empty() && media_events.is_empty() {
                return;
            }
            for event in &document_events {
                for id in self.document.listeners_for(event.kind()) {
                    self.surface.handle_document_event(id, event);
                }
            }
            for event in media_events {
                self.surface.on_media_event(event);
            }
        }
        warn!("notifications still queued after {MAX_PUMP_ROUNDS} rounds");
    }

    /// Runs the media clock for `secs` and delivers the resulting events.
    pub fn tick(&mut self, secs: f64) {
        self.media.advance(secs);
        self.pump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ContainerElement, MediaElement};
    use crate::domain::ui::{ContainerClass, KeyboardInput, PresentationMode};
    use crate::domain::video::VolumeLevel;
    use crate::test_utils::assert_abs_diff_eq;

    fn player() -> MemoryPlayer {
        MemoryPlayer::from_config(
            &MemoryDocument::new(),
            &Config::default(),
            PlayerOptions::new("demo.mp4").with_captions("demo.vtt"),
            90.0,
        )
        .expect("valid options")
    }

    fn press(player: &mut MemoryPlayer, key: &str) -> EventDisposition {
        player.dispatch(&DocumentEvent::KeyDown(KeyboardInput::new(key)))
    }

    #[test]
    fn from_config_attaches_and_applies_volume() {
        let config = Config {
            volume: Some(0.3),
            ..Config::default()
        };
        let player = MemoryPlayer::from_config(
            &MemoryDocument::new(),
            &config,
            PlayerOptions::new("demo.mp4"),
            90.0,
        )
        .expect("valid options");

        assert!(player.surface().is_attached());
        assert_abs_diff_eq!(player.media.volume(), 0.3);
        assert_eq!(player.container.volume_level(), Some(VolumeLevel::Low));
        assert_eq!(player.total_time.text(), "1:30");
    }

    #[test]
    fn tick_updates_current_time_label() {
        let mut player = player();
        press(&mut player, " ");
        assert!(!player.container.has_class(ContainerClass::Paused));

        player.tick(65.0);
        assert_eq!(player.current_time.text(), "1:05");
    }

    #[test]
    fn fullscreen_round_trip_through_notifications() {
        let mut player = player();
        assert!(press(&mut player, "f").is_consumed());
        assert!(player.container.has_class(ContainerClass::FullScreen));
        assert_eq!(player.snapshot().mode, PresentationMode::FullScreen);

        player.document.leave_fullscreen();
        player.pump();
        assert!(!player.container.has_class(ContainerClass::FullScreen));
        assert_eq!(player.snapshot().mode, PresentationMode::Inline);
    }

    #[test]
    fn mini_player_then_fullscreen_exits_picture_in_picture_first() {
        let mut player = player();
        press(&mut player, "i");
        assert!(player.container.has_class(ContainerClass::MiniPlayer));

        press(&mut player, "f");
        assert!(!player.media.is_picture_in_picture());
        assert!(!player.container.has_class(ContainerClass::MiniPlayer));
        assert!(player.container.has_class(ContainerClass::FullScreen));
    }

    #[test]
    fn captions_track_follows_options() {
        let mut player = player();
        assert_eq!(player.media.text_track_count(), 1);
        press(&mut player, "c");
        assert!(player.container.has_class(ContainerClass::Captions));
    }
}
