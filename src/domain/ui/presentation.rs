// SPDX-License-Identifier: MPL-2.0
//! Presentation mode state machine.
//!
//! Fullscreen, mini-player (picture-in-picture), theater and inline are
//! mutually exclusive presentation modes. The mode is derived from the
//! observed platform state, and every toggle request goes through a single
//! transition table ([`PresentationMode::plan`]).
//!
//! `fullscreen` and `picture_in_picture` only change when the platform
//! reports a change. A refused request therefore never flips a mode.

/// Presentation mode, in precedence order (fullscreen wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    /// Default in-page layout.
    #[default]
    Inline,
    /// Wide in-page layout.
    Theater,
    /// Video detached into a picture-in-picture window.
    MiniPlayer,
    /// A fullscreen element is set on the document.
    FullScreen,
}

/// A toggle requested by a button or keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationRequest {
    ToggleTheater,
    ToggleMiniPlayer,
    ToggleFullScreen,
}

/// Platform effect chosen by the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationCommand {
    /// Set or clear the theater class. Theater is an in-page layout, applied directly.
    SetTheater(bool),
    RequestFullscreen,
    ExitFullscreen,
    RequestPictureInPicture,
    ExitPictureInPicture,
}

impl PresentationMode {
    /// Transition table: commands to run for `request` in this mode.
    ///
    /// An empty slice means the request is ignored in this mode.
    #[must_use]
    pub fn plan(self, request: PresentationRequest) -> &'static [PresentationCommand] {
        use PresentationCommand as C;
        use PresentationRequest as R;

        match (self, request) {
            (Self::FullScreen, R::ToggleFullScreen) => &[C::ExitFullscreen],
            (Self::FullScreen, R::ToggleTheater | R::ToggleMiniPlayer) => &[],

            (Self::MiniPlayer, R::ToggleMiniPlayer) => &[C::ExitPictureInPicture],
            (Self::MiniPlayer, R::ToggleFullScreen) => {
                &[C::ExitPictureInPicture, C::RequestFullscreen]
            }
            // Theater under the mini-player is resolved by PresentationState,
            // which knows the current layout.
            (Self::MiniPlayer, R::ToggleTheater) => &[],

            (Self::Inline, R::ToggleTheater) => &[C::SetTheater(true)],
            (Self::Theater, R::ToggleTheater) => &[C::SetTheater(false)],
            (Self::Inline | Self::Theater, R::ToggleMiniPlayer) => &[C::RequestPictureInPicture],
            (Self::Inline | Self::Theater, R::ToggleFullScreen) => &[C::RequestFullscreen],
        }
    }
}

/// Observed presentation flags of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub theater: bool,
    pub picture_in_picture: bool,
    pub fullscreen: bool,
}

impl PresentationState {
    /// Current mode, with precedence fullscreen > mini-player > theater > inline.
    #[must_use]
    pub fn mode(self) -> PresentationMode {
        if self.fullscreen {
            PresentationMode::FullScreen
        } else if self.picture_in_picture {
            PresentationMode::MiniPlayer
        } else if self.theater {
            PresentationMode::Theater
        } else {
            PresentationMode::Inline
        }
    }

    /// Commands to run for `request` from the current state.
    #[must_use]
    pub fn plan(self, request: PresentationRequest) -> Vec<PresentationCommand> {
        let mode = self.mode();
        if mode == PresentationMode::MiniPlayer && request == PresentationRequest::ToggleTheater {
            // The page behind the mini-player keeps its own layout.
            return vec![PresentationCommand::SetTheater(!self.theater)];
        }
        mode.plan(request).to_vec()
    }

    /// Records a command that takes effect immediately (theater only).
    ///
    /// Fullscreen and picture-in-picture wait for the platform notification.
    pub fn apply_immediate(&mut self, command: PresentationCommand) {
        if let PresentationCommand::SetTheater(on) = command {
            self.theater = on;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PresentationCommand as C;
    use PresentationRequest as R;

    fn state(theater: bool, picture_in_picture: bool, fullscreen: bool) -> PresentationState {
        PresentationState {
            theater,
            picture_in_picture,
            fullscreen,
        }
    }

    #[test]
    fn mode_precedence() {
        assert_eq!(state(false, false, false).mode(), PresentationMode::Inline);
        assert_eq!(state(true, false, false).mode(), PresentationMode::Theater);
        assert_eq!(state(true, true, false).mode(), PresentationMode::MiniPlayer);
        assert_eq!(state(true, true, true).mode(), PresentationMode::FullScreen);
        assert_eq!(state(false, false, true).mode(), PresentationMode::FullScreen);
    }

    #[test]
    fn fullscreen_blocks_theater_and_mini_player() {
        let fullscreen = state(false, false, true);
        assert!(fullscreen.plan(R::ToggleTheater).is_empty());
        assert!(fullscreen.plan(R::ToggleMiniPlayer).is_empty());
        assert_eq!(fullscreen.plan(R::ToggleFullScreen), vec![C::ExitFullscreen]);
    }

    #[test]
    fn inline_and_theater_transitions() {
        let inline = state(false, false, false);
        assert_eq!(inline.plan(R::ToggleTheater), vec![C::SetTheater(true)]);
        assert_eq!(inline.plan(R::ToggleMiniPlayer), vec![C::RequestPictureInPicture]);
        assert_eq!(inline.plan(R::ToggleFullScreen), vec![C::RequestFullscreen]);

        let theater = state(true, false, false);
        assert_eq!(theater.plan(R::ToggleTheater), vec![C::SetTheater(false)]);
        assert_eq!(theater.plan(R::ToggleFullScreen), vec![C::RequestFullscreen]);
    }

    #[test]
    fn mini_player_transitions() {
        let mini = state(false, true, false);
        assert_eq!(mini.plan(R::ToggleMiniPlayer), vec![C::ExitPictureInPicture]);
        assert_eq!(
            mini.plan(R::ToggleFullScreen),
            vec![C::ExitPictureInPicture, C::RequestFullscreen]
        );
        assert_eq!(mini.plan(R::ToggleTheater), vec![C::SetTheater(true)]);
        assert_eq!(
            state(true, true, false).plan(R::ToggleTheater),
            vec![C::SetTheater(false)]
        );
    }

    #[test]
    fn only_theater_applies_immediately() {
        let mut presentation = PresentationState::default();
        presentation.apply_immediate(C::SetTheater(true));
        presentation.apply_immediate(C::RequestFullscreen);
        presentation.apply_immediate(C::RequestPictureInPicture);
        assert_eq!(presentation, state(true, false, false));
    }
}
