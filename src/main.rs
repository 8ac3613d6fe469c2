// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use ws_video_player::app::{self, Flags};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let mut opt = |key: &'static str| -> Option<String> {
        args.opt_value_from_str(key).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring argument {key}");
            None
        })
    };

    let flags = Flags {
        lang: opt("--lang"),
        video: opt("--video"),
        captions: opt("--captions"),
        accent: opt("--accent"),
    };

    app::run(flags)
}
