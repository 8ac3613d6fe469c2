// SPDX-License-Identifier: MPL-2.0
//! In-memory media element with a simulated clock.

use super::document::DocumentState;
use crate::application::port::{MediaElement, MediaEvent, TextTrackMode};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use tracing::debug;

#[derive(Debug)]
pub(super) struct MediaState {
    current_time: f64,
    duration: f64,
    paused: bool,
    muted: bool,
    volume: f64,
    playback_rate: f64,
    text_tracks: Vec<TextTrackMode>,
    classes: Vec<String>,
    /// Notifications waiting to be delivered to the player.
    pub(super) events: VecDeque<MediaEvent>,
}

impl MediaState {
    fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            paused: true,
            muted: false,
            volume: 1.0,
            playback_rate: 1.0,
            text_tracks: Vec::new(),
            classes: Vec::new(),
            events: VecDeque::new(),
        }
    }

    fn has_known_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }
}

/// Shared handle to an in-memory media element.
///
/// The element starts paused at 0 with volume 1 and rate 1. Time only moves
/// through [`advance`](Self::advance) or seeks.
#[derive(Debug, Clone)]
pub struct MemoryMedia {
    pub(super) state: Rc<RefCell<MediaState>>,
    document: Weak<RefCell<DocumentState>>,
}

impl MemoryMedia {
    /// Detached media of `duration_secs` (NaN for not yet loaded).
    ///
    /// Outside a document, picture-in-picture requests are refused.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self::in_document(duration_secs, Weak::new())
    }

    pub(super) fn in_document(duration_secs: f64, document: Weak<RefCell<DocumentState>>) -> Self {
        Self {
            state: Rc::new(RefCell::new(MediaState::new(duration_secs))),
            document,
        }
    }

    /// Adds `count` disabled text tracks.
    #[must_use]
    pub fn with_text_tracks(self, count: usize) -> Self {
        self.state
            .borrow_mut()
            .text_tracks
            .extend(std::iter::repeat_n(TextTrackMode::Disabled, count));
        self
    }

    /// Finishes loading: sets the duration and fires `loadeddata`.
    pub fn load(&self, duration_secs: f64) {
        let mut state = self.state.borrow_mut();
        state.duration = duration_secs;
        state.events.push_back(MediaEvent::LoadedData);
    }

    /// Moves the clock by `secs` of wall time, scaled by the playback rate.
    ///
    /// Reaching the end pauses playback.
    pub fn advance(&self, secs: f64) {
        let mut state = self.state.borrow_mut();
        if state.paused || !state.has_known_duration() || secs <= 0.0 {
            return;
        }
        let next = state.current_time + secs * state.playback_rate;
        if next >= state.duration {
            state.current_time = state.duration;
            state.paused = true;
            state.events.push_back(MediaEvent::TimeUpdate);
            state.events.push_back(MediaEvent::Pause);
        } else {
            state.current_time = next;
            state.events.push_back(MediaEvent::TimeUpdate);
        }
    }

    /// Drains the queued notifications.
    #[must_use]
    pub fn take_events(&self) -> Vec<MediaEvent> {
        self.state.borrow_mut().events.drain(..).collect()
    }

    /// Host-supplied classes added so far.
    #[must_use]
    pub fn custom_classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    /// Returns true if this element is the document's picture-in-picture element.
    #[must_use]
    pub fn is_picture_in_picture(&self) -> bool {
        self.document.upgrade().is_some_and(|document| {
            document
                .borrow()
                .picture_in_picture
                .as_ref()
                .is_some_and(|media| Rc::ptr_eq(media, &self.state))
        })
    }
}

impl MediaElement for MemoryMedia {
    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        if secs.is_nan() {
            return;
        }
        let mut state = self.state.borrow_mut();
        state.current_time = if state.has_known_duration() {
            secs.clamp(0.0, state.duration)
        } else {
            secs.max(0.0)
        };
        state.events.push_back(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }

    fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn play(&mut self) {
        let mut state = self.state.borrow_mut();
        if !state.paused {
            return;
        }
        if state.has_known_duration() && state.current_time >= state.duration {
            state.current_time = 0.0;
        }
        state.paused = false;
        state.events.push_back(MediaEvent::Play);
    }

    fn pause(&mut self) {
        let mut state = self.state.borrow_mut();
        if state.paused {
            return;
        }
        state.paused = true;
        state.events.push_back(MediaEvent::Pause);
    }

    fn is_muted(&self) -> bool {
        self.state.borrow().muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }

    fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        self.state.borrow_mut().volume = volume.clamp(0.0, 1.0);
    }

    fn playback_rate(&self) -> f64 {
        self.state.borrow().playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.state.borrow_mut().playback_rate = rate;
    }

    fn text_track_count(&self) -> usize {
        self.state.borrow().text_tracks.len()
    }

    fn text_track_mode(&self, index: usize) -> Option<TextTrackMode> {
        self.state.borrow().text_tracks.get(index).copied()
    }

    fn set_text_track_mode(&mut self, index: usize, mode: TextTrackMode) {
        if let Some(track) = self.state.borrow_mut().text_tracks.get_mut(index) {
            *track = mode;
        }
    }

    fn request_picture_in_picture(&mut self) {
        let Some(document) = self.document.upgrade() else {
            debug!("picture-in-picture refused: media is not in a document");
            return;
        };
        let mut document = document.borrow_mut();
        if !document.picture_in_picture_allowed {
            debug!("picture-in-picture refused by the platform");
            return;
        }

        match document.picture_in_picture.replace(Rc::clone(&self.state)) {
            Some(previous) if Rc::ptr_eq(&previous, &self.state) => return,
            Some(previous) => previous
                .borrow_mut()
                .events
                .push_back(MediaEvent::LeavePictureInPicture),
            None => {}
        }
        self.state
            .borrow_mut()
            .events
            .push_back(MediaEvent::EnterPictureInPicture);
    }

    fn add_custom_class(&mut self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }
}
