// SPDX-License-Identifier: MPL-2.0
//! Play/pause status reported by the media element.

/// Status carried by the media element's `play` and `pause` events.
///
/// Drives the `paused` class on the container, which selects the
/// play/pause icon in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStatus {
    /// Playback started or resumed.
    Play,
    /// Playback paused.
    Pause,
}

impl PlayStatus {
    /// Status matching a media element's `paused` flag.
    #[must_use]
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            Self::Pause
        } else {
            Self::Play
        }
    }

    /// Returns true if the media is playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_paused_maps_flag() {
        assert_eq!(PlayStatus::from_paused(true), PlayStatus::Pause);
        assert_eq!(PlayStatus::from_paused(false), PlayStatus::Play);
    }

    #[test]
    fn is_playing() {
        assert!(PlayStatus::Play.is_playing());
        assert!(!PlayStatus::Pause.is_playing());
    }
}
