// SPDX-License-Identifier: MPL-2.0
//! Scrub gesture state.
//!
//! A scrub is a drag of the seek handle: playback pauses while the primary
//! button is held, the bar fill follows the pointer, and the seek is
//! committed when the button is released.

use crate::domain::ui::PointerButtons;

/// Result of re-evaluating the gesture against a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubTransition {
    /// Idle → Scrubbing: pause playback.
    Started,
    /// Scrubbing → Idle: commit the seek, resume if `resume` is set.
    Finished { resume: bool },
    /// Button state agrees with the current state.
    Unchanged,
}

/// Scrub gesture owned by one player.
///
/// `is_scrubbing` is recomputed from the pointer's primary button on every
/// transition, never flipped, so a duplicated pointer-up cannot restart a
/// scrub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubGesture {
    is_scrubbing: bool,
    was_paused: bool,
}

impl ScrubGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the seek handle is being dragged.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.is_scrubbing
    }

    /// Paused state captured when the current (or last) scrub began.
    #[must_use]
    pub fn was_paused(&self) -> bool {
        self.was_paused
    }

    /// Re-evaluates the gesture from the pointer buttons.
    ///
    /// `media_paused` is the media's paused flag before this event; it is
    /// captured only when a scrub starts.
    pub fn update(&mut self, buttons: PointerButtons, media_paused: bool) -> ScrubTransition {
        let was_scrubbing = self.is_scrubbing;
        self.is_scrubbing = buttons.primary_held();

        match (was_scrubbing, self.is_scrubbing) {
            (false, true) => {
                self.was_paused = media_paused;
                ScrubTransition::Started
            }
            (true, false) => ScrubTransition::Finished {
                resume: !self.was_paused,
            },
            // A press while already scrubbing keeps the captured state; a
            // non-primary press while idle neither seeks nor resumes.
            (true, true) | (false, false) => ScrubTransition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let gesture = ScrubGesture::new();
        assert!(!gesture.is_scrubbing());
        assert!(!gesture.was_paused());
    }

    #[test]
    fn press_starts_and_captures_paused_state() {
        let mut gesture = ScrubGesture::new();
        assert_eq!(
            gesture.update(PointerButtons::PRIMARY, true),
            ScrubTransition::Started
        );
        assert!(gesture.is_scrubbing());
        assert!(gesture.was_paused());
    }

    #[test]
    fn release_resumes_only_if_playing_before() {
        let mut gesture = ScrubGesture::new();
        gesture.update(PointerButtons::PRIMARY, false);
        // The media is paused by the scrub itself; that must not leak into resume.
        assert_eq!(
            gesture.update(PointerButtons::NONE, true),
            ScrubTransition::Finished { resume: true }
        );
        assert!(!gesture.is_scrubbing());

        gesture.update(PointerButtons::PRIMARY, true);
        assert_eq!(
            gesture.update(PointerButtons::NONE, true),
            ScrubTransition::Finished { resume: false }
        );
    }

    #[test]
    fn repeated_press_keeps_captured_state() {
        let mut gesture = ScrubGesture::new();
        gesture.update(PointerButtons::PRIMARY, false);
        assert_eq!(
            gesture.update(PointerButtons::PRIMARY, true),
            ScrubTransition::Unchanged
        );
        assert!(!gesture.was_paused());
    }

    #[test]
    fn secondary_button_while_idle_does_nothing() {
        let mut gesture = ScrubGesture::new();
        assert_eq!(
            gesture.update(PointerButtons(2), false),
            ScrubTransition::Unchanged
        );
        assert!(!gesture.is_scrubbing());
    }

    #[test]
    fn gesture_is_reentrant() {
        let mut gesture = ScrubGesture::new();
        for paused in [false, true, false] {
            assert_eq!(
                gesture.update(PointerButtons::PRIMARY, paused),
                ScrubTransition::Started
            );
            assert_eq!(
                gesture.update(PointerButtons::NONE, true),
                ScrubTransition::Finished { resume: !paused }
            );
        }
    }
}
