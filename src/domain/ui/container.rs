// SPDX-License-Identifier: MPL-2.0
//! CSS classes toggled on the player container.

use std::fmt;

/// Mode flags encoded in the container's class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerClass {
    /// A fullscreen element is set on the document.
    FullScreen,
    /// The video is shown in picture-in-picture.
    MiniPlayer,
    /// Wide in-page layout.
    Theater,
    /// The primary text track is showing.
    Captions,
    /// The user is dragging the seek handle.
    Scrubbing,
    /// Playback is paused.
    Paused,
}

impl ContainerClass {
    /// All classes, in stylesheet order.
    pub const ALL: [Self; 6] = [
        Self::FullScreen,
        Self::MiniPlayer,
        Self::Theater,
        Self::Captions,
        Self::Scrubbing,
        Self::Paused,
    ];

    /// Class name as written in the stylesheet.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::FullScreen => "full-screen",
            Self::MiniPlayer => "mini-player",
            Self::Theater => "theater",
            Self::Captions => "captions",
            Self::Scrubbing => "scrubbing",
            Self::Paused => "paused",
        }
    }

    /// Looks up a class by its stylesheet name.
    #[must_use]
    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.css_name() == name)
    }
}

impl fmt::Display for ContainerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}
