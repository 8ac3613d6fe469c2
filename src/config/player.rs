// SPDX-License-Identifier: MPL-2.0
//! Host-facing player options.
//!
//! These are the inputs a page gives one player instance: the video source,
//! an optional caption track, extra classes and an accent colour. They can
//! be written as the `[player]` table of `settings.toml`.

use crate::application::port::dom::ACCENT_COLOR_PROPERTY;
use crate::config::defaults::{DEFAULT_CAPTION_LANG_LABEL, DEFAULT_CAPTION_SRC_LANG};
use crate::error::OptionsError;
use serde::{Deserialize, Serialize};

fn default_caption_src_lang() -> String {
    DEFAULT_CAPTION_SRC_LANG.to_string()
}

fn default_caption_lang_label() -> String {
    DEFAULT_CAPTION_LANG_LABEL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Media URL or path. Required.
    pub video_src: String,
    /// Caption track URL (WebVTT).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_src: Option<String>,
    #[serde(default = "default_caption_src_lang")]
    pub caption_src_lang: String,
    #[serde(default = "default_caption_lang_label")]
    pub caption_lang_label: String,
    /// Extra classes added to the media element.
    #[serde(default)]
    pub player_classes: Vec<String>,
    /// Extra classes added to the container.
    #[serde(default)]
    pub container_classes: Vec<String>,
    /// Any CSS colour; written to `--video-accent-color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

impl PlayerOptions {
    /// Options for `video_src` with every other input at its default.
    #[must_use]
    pub fn new(video_src: impl Into<String>) -> Self {
        Self {
            video_src: video_src.into(),
            caption_src: None,
            caption_src_lang: default_caption_src_lang(),
            caption_lang_label: default_caption_lang_label(),
            player_classes: Vec::new(),
            container_classes: Vec::new(),
            accent_color: None,
        }
    }

    #[must_use]
    pub fn with_captions(mut self, caption_src: impl Into<String>) -> Self {
        self.caption_src = Some(caption_src.into());
        self
    }

    #[must_use]
    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_player_class(mut self, class: impl Into<String>) -> Self {
        self.player_classes.push(class.into());
        self
    }

    /// Returns true if a caption track is configured.
    #[must_use]
    pub fn has_captions(&self) -> bool {
        self.caption_src
            .as_deref()
            .is_some_and(|src| !src.trim().is_empty())
    }

    /// Checks the options a player cannot start without.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.video_src.trim().is_empty() {
            return Err(OptionsError::MissingVideoSource);
        }
        if self.has_captions() && self.caption_src_lang.trim().is_empty() {
            return Err(OptionsError::MissingCaptionLanguage);
        }
        let classes = self.player_classes.iter().chain(&self.container_classes);
        if let Some(bad) = classes
            .into_iter()
            .find(|class| class.is_empty() || class.chars().any(char::is_whitespace))
        {
            return Err(OptionsError::InvalidClassName(bad.clone()));
        }
        Ok(())
    }

    /// Inline style for the container, if an accent colour is set.
    #[must_use]
    pub fn accent_style(&self) -> Option<(&'static str, &str)> {
        self.accent_color
            .as_deref()
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .map(|color| (ACCENT_COLOR_PROPERTY, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_caption_defaults() {
        let options = PlayerOptions::new("movie.mp4");
        assert_eq!(options.caption_src_lang, "en");
        assert_eq!(options.caption_lang_label, "English");
        assert!(!options.has_captions());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn empty_video_source_is_rejected() {
        assert_eq!(
            PlayerOptions::new("  ").validate(),
            Err(OptionsError::MissingVideoSource)
        );
    }

    #[test]
    fn captions_need_a_language() {
        let mut options = PlayerOptions::new("movie.mp4").with_captions("movie.vtt");
        options.caption_src_lang = String::new();
        assert_eq!(
            options.validate(),
            Err(OptionsError::MissingCaptionLanguage)
        );
    }

    #[test]
    fn class_names_cannot_contain_spaces() {
        let options = PlayerOptions::new("movie.mp4").with_container_class("rounded shadow");
        assert_eq!(
            options.validate(),
            Err(OptionsError::InvalidClassName("rounded shadow".into()))
        );
    }

    #[test]
    fn accent_style_targets_custom_property() {
        let options = PlayerOptions::new("movie.mp4").with_accent_color("#ff0055");
        assert_eq!(
            options.accent_style(),
            Some(("--video-accent-color", "#ff0055"))
        );
        assert_eq!(PlayerOptions::new("movie.mp4").accent_style(), None);
        assert_eq!(
            PlayerOptions::new("movie.mp4")
                .with_accent_color(" ")
                .accent_style(),
            None
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let options: PlayerOptions = toml::from_str(r#"video_src = "clip.webm""#)
            .expect("minimal options should parse");
        assert_eq!(options, PlayerOptions::new("clip.webm"));
    }

    #[test]
    fn missing_video_source_fails_to_parse() {
        let parsed: Result<PlayerOptions, _> = toml::from_str(r#"accent_color = "red""#);
        assert!(parsed.is_err());
    }
}
