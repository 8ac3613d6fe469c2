// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Every variant maps to a Fluent key so the player can show it localized;
//! `Display` is the English form used in logs.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Reading or writing the settings file failed.
    Io(String),
    /// The settings file could not be parsed or serialized.
    Config(String),
    /// Host-supplied player options were rejected.
    Options(OptionsError),
}

/// Reasons the player refuses its options before touching any element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `video_src` is empty or blank.
    MissingVideoSource,
    /// A caption source is given but `caption_src_lang` is blank.
    MissingCaptionLanguage,
    /// A class name is empty or contains whitespace.
    InvalidClassName(String),
}

impl OptionsError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::MissingVideoSource => "error-options-missing-video-source",
            Self::MissingCaptionLanguage => "error-options-missing-caption-language",
            Self::InvalidClassName(_) => "error-options-invalid-class-name",
        }
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVideoSource => f.write_str("no video source given"),
            Self::MissingCaptionLanguage => f.write_str("caption track has no language"),
            Self::InvalidClassName(name) => write!(f, "class name {name:?} is not a single token"),
        }
    }
}

impl Error {
    /// Fluent key used by [`crate::i18n::I18n::tr_error`].
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Io(_) => "error-io",
            Self::Config(_) => "error-config",
            Self::Options(options) => options.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(detail) => write!(f, "settings i/o failed: {detail}"),
            Self::Config(detail) => write!(f, "settings file is invalid: {detail}"),
            Self::Options(options) => write!(f, "invalid player options: {options}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<OptionsError> for Error {
    fn from(err: OptionsError) -> Self {
        Self::Options(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failures_keep_their_message() {
        let err: Error = std::io::Error::other("read-only filesystem").into();
        assert!(matches!(&err, Error::Io(detail) if detail.contains("read-only")));
        assert_eq!(err.i18n_key(), "error-io");
    }

    #[test]
    fn toml_parse_error_is_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= nope");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.i18n_key(), "error-config");
    }

    #[test]
    fn options_error_wraps_and_keeps_key() {
        let err: Error = OptionsError::MissingVideoSource.into();
        assert_eq!(err, Error::Options(OptionsError::MissingVideoSource));
        assert_eq!(err.i18n_key(), "error-options-missing-video-source");
        assert_eq!(err.to_string(), "invalid player options: no video source given");
    }

    #[test]
    fn invalid_class_name_is_quoted() {
        let err = OptionsError::InvalidClassName("a b".into());
        assert_eq!(err.to_string(), "class name \"a b\" is not a single token");
        assert_eq!(err.i18n_key(), "error-options-invalid-class-name");
    }
}
