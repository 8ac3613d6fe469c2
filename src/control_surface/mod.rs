// SPDX-License-Identifier: MPL-2.0
//! Control surface of one player instance.
//!
//! The surface owns the element handles of one player, its scrub gesture
//! and its presentation state. It registers the document listeners the
//! player needs, routes platform events to the behavior functions, and
//! exposes one method per control of the player template.
//!
//! # Lifecycle
//!
//! ```ignore
//! let mut surface = ControlSurface::new(elements, options)?;
//! surface.attach();
//! // ... deliver events ...
//! surface.detach();
//! ```
//!
//! Attach and detach are symmetric: detach removes exactly the listener
//! tokens attach registered. Several surfaces can share one document; each
//! one only reacts to events delivered under its own tokens.

pub mod listeners;
pub mod snapshot;

pub use listeners::ListenerRegistry;
pub use snapshot::ControlsSnapshot;

use crate::application::behavior::{self, CaptionToggle};
use crate::application::keyboard::{self, KeyAction};
use crate::application::port::{
    ContainerElement, Document, DocumentEvent, EventDisposition, ListenerId, ListenerKind,
    MediaElement, MediaEvent, SliderElement, TextElement, TimelineElement,
};
use crate::application::scrub::{ScrubGesture, ScrubTransition};
use crate::config::PlayerOptions;
use crate::domain::ui::{
    ContainerClass, KeyboardInput, PointerInput, PresentationCommand, PresentationRequest,
    PresentationState,
};
use crate::domain::video::{
    PlayStatus, PlaybackRate, ProgressRatio, SeekStep, Volume, VolumeLevel,
};
use crate::error::Result;
use tracing::{debug, trace};

/// Element handles of one player.
pub struct Elements {
    pub media: Box<dyn MediaElement>,
    pub container: Box<dyn ContainerElement>,
    pub timeline: Box<dyn TimelineElement>,
    pub current_time: Box<dyn TextElement>,
    pub total_time: Box<dyn TextElement>,
    pub speed_button: Box<dyn TextElement>,
    pub volume_slider: Box<dyn SliderElement>,
    pub document: Box<dyn Document>,
}

pub struct ControlSurface {
    media: Box<dyn MediaElement>,
    container: Box<dyn ContainerElement>,
    timeline: Box<dyn TimelineElement>,
    current_time: Box<dyn TextElement>,
    total_time: Box<dyn TextElement>,
    speed_button: Box<dyn TextElement>,
    volume_slider: Box<dyn SliderElement>,
    document: Box<dyn Document>,
    options: PlayerOptions,
    seek_step: SeekStep,
    listeners: ListenerRegistry,
    scrub: ScrubGesture,
    presentation: PresentationState,
    volume_level: VolumeLevel,
    /// Bar fill shown while scrubbing.
    preview: Option<ProgressRatio>,
}

impl ControlSurface {
    /// Builds a detached surface. Fails if `options` are invalid.
    pub fn new(elements: Elements, options: PlayerOptions) -> Result<Self> {
        options.validate()?;
        let Elements {
            media,
            container,
            timeline,
            current_time,
            total_time,
            speed_button,
            volume_slider,
            document,
        } = elements;

        Ok(Self {
            media,
            container,
            timeline,
            current_time,
            total_time,
            speed_button,
            volume_slider,
            document,
            options,
            seek_step: SeekStep::default(),
            listeners: ListenerRegistry::new(),
            scrub: ScrubGesture::new(),
            presentation: PresentationState::default(),
            volume_level: VolumeLevel::default(),
            preview: None,
        })
    }

    pub fn set_seek_step(&mut self, seek_step: SeekStep) {
        self.seek_step = seek_step;
    }

    #[must_use]
    pub fn seek_step(&self) -> SeekStep {
        self.seek_step
    }

    #[must_use]
    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listeners.is_attached()
    }

    /// Tokens of the live document listeners.
    #[must_use]
    pub fn listener_ids(&self) -> Vec<ListenerId> {
        self.listeners.ids()
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_scrubbing()
    }

    #[must_use]
    pub fn presentation(&self) -> PresentationState {
        self.presentation
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Registers the document listeners and brings every visual hook in
    /// line with the media. Attaching an attached surface does nothing.
    pub fn attach(&mut self) {
        if self.is_attached() {
            debug!("control surface already attached");
            return;
        }

        for kind in ListenerKind::ALL {
            let id = self.document.add_listener(kind);
            self.listeners.insert(kind, id);
        }
        self.apply_options();
        self.sync_from_platform();
        debug!(
            listeners = self.listeners.len(),
            video_src = %self.options.video_src,
            "control surface attached"
        );
    }

    /// Removes the listeners registered by [`attach`](Self::attach).
    ///
    /// An unfinished scrub is abandoned without seeking.
    pub fn detach(&mut self) {
        if !self.is_attached() {
            return;
        }
        for id in self.listeners.drain() {
            self.document.remove_listener(id);
        }
        if self.scrub.is_scrubbing() {
            self.scrub = ScrubGesture::new();
            self.preview = None;
            self.container.set_class(ContainerClass::Scrubbing, false);
        }
        debug!("control surface detached");
    }

    fn apply_options(&mut self) {
        for class in &self.options.player_classes {
            self.media.add_custom_class(class);
        }
        for class in &self.options.container_classes {
            self.container.add_custom_class(class);
        }
        if let Some((name, value)) = self.options.accent_style() {
            self.container.set_style_property(name, value);
        }
    }

    fn sync_from_platform(&mut self) {
        behavior::sync_fullscreen_class(
            &mut *self.container,
            &*self.document,
            &mut self.presentation,
        );
        // A picture-in-picture window closed while detached.
        if self.presentation.picture_in_picture && !self.document.has_picture_in_picture_element()
        {
            behavior::sync_mini_player_class(&mut *self.container, &mut self.presentation, false);
        }

        behavior::set_play_pause_icon(
            &mut *self.container,
            PlayStatus::from_paused(self.media.is_paused()),
        );
        behavior::update_total_time(&*self.media, &mut *self.total_time);
        behavior::update_time_display(
            &*self.media,
            &mut *self.current_time,
            &mut *self.timeline,
            false,
        );
        self.speed_button
            .set_text(&PlaybackRate::new(self.media.playback_rate()).label());

        let muted = self.media.is_muted();
        self.volume_level = VolumeLevel::from_volume(Volume::new(self.media.volume()), muted);
        self.volume_slider
            .set_value(if muted { 0.0 } else { self.media.volume() });
        self.container.set_volume_level(self.volume_level);

        let showing = behavior::caption_track_mode(&*self.media).is_some_and(|m| m.is_showing());
        self.container.set_class(ContainerClass::Captions, showing);
    }

    // =========================================================================
    // Document events
    // =========================================================================

    /// Handles an event delivered to the document listener `id`.
    ///
    /// Events under a token this surface does not own are ignored, so a
    /// detached surface or a neighbouring player never reacts.
    pub fn handle_document_event(
        &mut self,
        id: ListenerId,
        event: &DocumentEvent,
    ) -> EventDisposition {
        if !self.listeners.owns(id, event.kind()) {
            trace!(id = id.0, "document event for another listener");
            return EventDisposition::Ignored;
        }

        match event {
            DocumentEvent::KeyDown(input) => self.handle_keyboard(input),
            DocumentEvent::MouseUp(pointer) => {
                if self.scrub.is_scrubbing() {
                    self.toggle_scrubbing(*pointer);
                    EventDisposition::Consumed
                } else {
                    EventDisposition::Ignored
                }
            }
            DocumentEvent::MouseMove(pointer) => self.track_pointer(*pointer),
            DocumentEvent::FullscreenChange => {
                let fullscreen = behavior::sync_fullscreen_class(
                    &mut *self.container,
                    &*self.document,
                    &mut self.presentation,
                );
                debug!(fullscreen, "fullscreen changed");
                EventDisposition::Ignored
            }
        }
    }

    /// Runs the shortcut bound to `input`, if any.
    pub fn handle_keyboard(&mut self, input: &KeyboardInput) -> EventDisposition {
        let focus = self.document.focused_element();
        let Some(action) = keyboard::resolve(input, focus) else {
            return EventDisposition::Ignored;
        };
        debug!(?action, key = %input.key, "keyboard shortcut");

        match action {
            KeyAction::TogglePlay => self.toggle_play(),
            KeyAction::ToggleFullScreen => {
                self.toggle_full_screen_mode();
            }
            KeyAction::ToggleTheater => {
                self.toggle_theater_mode();
            }
            KeyAction::ToggleMiniPlayer => {
                self.toggle_mini_player_mode();
            }
            KeyAction::ToggleMute => {
                self.toggle_mute();
            }
            KeyAction::SeekBackward => self.skip(-self.seek_step.value()),
            KeyAction::SeekForward => self.skip(self.seek_step.value()),
            KeyAction::ToggleCaptions => {
                self.toggle_captions();
            }
        }
        EventDisposition::Consumed
    }

    // =========================================================================
    // Media events
    // =========================================================================

    /// Mirrors a media notification into the visual hooks.
    ///
    /// Ignored while detached.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        if !self.is_attached() {
            trace!(?event, "media event while detached");
            return;
        }

        match event {
            MediaEvent::LoadedData => {
                behavior::update_total_time(&*self.media, &mut *self.total_time);
            }
            MediaEvent::TimeUpdate => behavior::update_time_display(
                &*self.media,
                &mut *self.current_time,
                &mut *self.timeline,
                self.scrub.is_scrubbing(),
            ),
            MediaEvent::Play => behavior::set_play_pause_icon(&mut *self.container, PlayStatus::Play),
            MediaEvent::Pause => {
                behavior::set_play_pause_icon(&mut *self.container, PlayStatus::Pause);
            }
            MediaEvent::EnterPictureInPicture => {
                behavior::sync_mini_player_class(&mut *self.container, &mut self.presentation, true);
            }
            MediaEvent::LeavePictureInPicture => {
                behavior::sync_mini_player_class(
                    &mut *self.container,
                    &mut self.presentation,
                    false,
                );
            }
        }
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// Play/pause button, video click, space and `k`.
    pub fn toggle_play(&mut self) {
        behavior::toggle_play(&mut *self.media);
    }

    /// Jumps by `delta_secs`, staying inside the media.
    pub fn skip(&mut self, delta_secs: f64) {
        behavior::skip_time(&mut *self.media, delta_secs);
    }

    /// Speed button.
    pub fn change_playback_speed(&mut self) -> PlaybackRate {
        behavior::change_playback_speed(&mut *self.media, &mut *self.speed_button)
    }

    /// Mute button and `m`.
    pub fn toggle_mute(&mut self) -> VolumeLevel {
        self.volume_level = behavior::toggle_mute(
            &mut *self.container,
            &mut *self.media,
            &mut *self.volume_slider,
        );
        self.volume_level
    }

    /// Volume slider `input` event.
    pub fn on_volume_input(&mut self, value: Volume) {
        behavior::on_volume_input(&mut *self.media, value);
    }

    /// Volume slider `change` event.
    pub fn on_volume_change(&mut self, value: Volume) -> VolumeLevel {
        self.volume_level = behavior::on_volume_change(
            &mut *self.container,
            &mut *self.media,
            &mut *self.volume_slider,
            value,
        );
        self.volume_level
    }

    /// A full slider interaction: `input` then `change`.
    pub fn set_volume(&mut self, value: Volume) -> VolumeLevel {
        self.on_volume_input(value);
        self.on_volume_change(value)
    }

    /// Captions button and `c`.
    pub fn toggle_captions(&mut self) -> CaptionToggle {
        behavior::toggle_captions(&mut *self.container, &mut *self.media)
    }

    /// Theater button and `t`.
    pub fn toggle_theater_mode(&mut self) -> Vec<PresentationCommand> {
        self.present(PresentationRequest::ToggleTheater)
    }

    /// Mini-player button and `i`.
    pub fn toggle_mini_player_mode(&mut self) -> Vec<PresentationCommand> {
        self.present(PresentationRequest::ToggleMiniPlayer)
    }

    /// Fullscreen button and `f`.
    pub fn toggle_full_screen_mode(&mut self) -> Vec<PresentationCommand> {
        self.present(PresentationRequest::ToggleFullScreen)
    }

    fn present(&mut self, request: PresentationRequest) -> Vec<PresentationCommand> {
        behavior::apply_presentation(
            request,
            &mut self.presentation,
            &mut *self.container,
            &mut *self.media,
            &mut *self.document,
        )
    }

    /// Pointer pressed on the seek bar.
    pub fn on_timeline_pointer_down(&mut self, pointer: PointerInput) -> ScrubTransition {
        let transition = self.toggle_scrubbing(pointer);
        self.preview_scrub(pointer);
        transition
    }

    /// Pointer moved over the seek bar.
    pub fn on_timeline_pointer_move(&mut self, pointer: PointerInput) -> EventDisposition {
        self.track_pointer(pointer)
    }

    /// A move that arrives with the primary button up ends the drag; the
    /// release happened somewhere the document could not see it.
    fn track_pointer(&mut self, pointer: PointerInput) -> EventDisposition {
        if self.scrub.is_scrubbing() && !pointer.buttons.primary_held() {
            debug!(x = pointer.x, "button released during drag");
            self.toggle_scrubbing(pointer);
            return EventDisposition::Consumed;
        }
        self.preview_scrub(pointer)
    }

    fn toggle_scrubbing(&mut self, pointer: PointerInput) -> ScrubTransition {
        let transition = behavior::toggle_scrubbing(
            &*self.timeline,
            &mut *self.container,
            &mut *self.media,
            &mut self.scrub,
            pointer,
        );
        if let ScrubTransition::Finished { .. } = transition {
            self.preview = None;
            behavior::update_time_display(
                &*self.media,
                &mut *self.current_time,
                &mut *self.timeline,
                false,
            );
        }
        transition
    }

    fn preview_scrub(&mut self, pointer: PointerInput) -> EventDisposition {
        let disposition =
            behavior::update_timeline_preview(&mut *self.timeline, self.scrub.is_scrubbing(), pointer);
        if disposition.is_consumed() {
            self.preview = Some(behavior::seek_ratio(
                pointer.x,
                self.timeline.bounding_rect(),
            ));
        }
        disposition
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Current state of the player for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ControlsSnapshot {
        let current_time = self.media.current_time();
        let duration = self.media.duration();
        ControlsSnapshot {
            status: PlayStatus::from_paused(self.media.is_paused()),
            current_time,
            duration,
            progress: self
                .preview
                .unwrap_or_else(|| ProgressRatio::of_position(current_time, duration)),
            volume: Volume::new(self.media.volume()),
            muted: self.media.is_muted(),
            volume_level: self.volume_level,
            playback_rate: PlaybackRate::new(self.media.playback_rate()),
            captions: behavior::caption_track_mode(&*self.media),
            mode: self.presentation.mode(),
            theater: self.presentation.theater,
            scrubbing: self.scrub.is_scrubbing(),
        }
    }
}

impl std::fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlSurface")
            .field("video_src", &self.options.video_src)
            .field("listeners", &self.listeners)
            .field("scrub", &self.scrub)
            .field("presentation", &self.presentation)
            .finish_non_exhaustive()
    }
}
