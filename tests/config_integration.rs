// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use std::fs;
use tempfile::tempdir;
use ws_video_player::application::port::dom::ACCENT_COLOR_PROPERTY;
use ws_video_player::application::port::MediaElement;
use ws_video_player::config::{self, Config};
use ws_video_player::domain::video::VolumeLevel;
use ws_video_player::error::{Error, OptionsError};
use ws_video_player::i18n::fluent::I18n;
use ws_video_player::infrastructure::{MemoryDocument, MemoryPlayer};

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("tooltip-play"), "Play (k)");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    // The command line wins over the settings file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn player_built_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r##"
seek_step_secs = 10.0
volume = 0.3

[player]
video_src = "lecture.mp4"
caption_src = "lecture.vtt"
container_classes = ["course-player"]
player_classes = ["lecture"]
accent_color = "#ff8800"
"##,
    )
    .expect("Failed to write settings");

    let config = config::load_from_path(&path).expect("Failed to load config");
    let options = config.player.clone().expect("player table");
    assert_eq!(options.caption_src_lang, "en");

    let document = MemoryDocument::new();
    let mut player =
        MemoryPlayer::from_config(&document, &config, options, 60.0).expect("valid options");

    assert_abs_diff_eq!(player.media.volume(), 0.3);
    assert_eq!(player.container.volume_level(), Some(VolumeLevel::Low));
    assert_eq!(player.container.custom_classes(), ["course-player"]);
    assert_eq!(player.media.custom_classes(), ["lecture"]);
    assert_eq!(
        player.container.style_property(ACCENT_COLOR_PROPERTY).as_deref(),
        Some("#ff8800")
    );
    assert!(player.snapshot().captions_available());

    let step = player.surface().seek_step().value();
    player.surface_mut().skip(step);
    assert_abs_diff_eq!(player.media.current_time(), 10.0);
}

#[test]
fn invalid_player_table_is_rejected_with_localized_message() {
    let config: Config = toml::from_str(
        r#"
[player]
video_src = "clip.mp4"
container_classes = ["two words"]
"#,
    )
    .expect("valid toml");
    let options = config.player.clone().expect("player table");

    let err = MemoryPlayer::from_config(&MemoryDocument::new(), &config, options, 10.0)
        .expect_err("class names with spaces are rejected");
    assert_eq!(
        err,
        Error::Options(OptionsError::InvalidClassName("two words".into()))
    );

    let i18n = I18n::new(Some("en-US".into()), &config);
    assert_eq!(
        i18n.tr_error(&err),
        "Invalid class name: two words"
    );
}
