// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Named values for the player window and its control bar.

- **Palette**: bar, surface, text and the default accent
- **Opacity**: hover and track translucency
- **Spacing**: 4px steps
- **Sizing**: buttons, seek bar, volume slider, video surface widths
- **Typography**: font sizes
- **Radius**, **Shadow**

```
use ws_video_player::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let hover = Color { a: opacity::HOVER, ..palette::TEXT };
assert!(spacing::SM > spacing::XS);
# let _ = hover;
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    /// Control bar background.
    pub const BAR: Color = Color::from_rgb(0.06, 0.06, 0.07);
    /// Stand-in for the video picture.
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const TEXT: Color = Color::WHITE;
    pub const TEXT_MUTED: Color = Color::from_rgb(0.7, 0.7, 0.72);
    /// Unplayed part of the seek bar.
    pub const TRACK: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const TOOLTIP: Color = Color::from_rgb(0.94, 0.94, 0.95);
    pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);

    /// Accent used when the player has no accent colour option.
    pub const ACCENT: Color = Color::from_rgb(0.9, 0.1, 0.1);
}

pub mod opacity {
    pub const NONE: f32 = 0.0;
    pub const HOVER: f32 = 0.15;
    pub const PRESSED: f32 = 0.3;
    pub const TRACK: f32 = 0.5;
    pub const BAR: f32 = 0.85;
    pub const ACCENT_HOVER: f32 = 0.8;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 32.0;

    pub const SCRUBBER_THUMB: f32 = 12.0;
    pub const TIMELINE_TRACK: f32 = 3.0;
    /// Track thickness while the seek handle is dragged.
    pub const TIMELINE_TRACK_ACTIVE: f32 = 5.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 80.0;

    pub const VIDEO_INLINE_WIDTH: f32 = 720.0;
    pub const VIDEO_MINI_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Video source name on the surface.
    pub const TITLE: f32 = 20.0;
    /// Button glyphs and status line.
    pub const BODY: f32 = 14.0;
    pub const TOOLTIP: f32 = 13.0;
    /// Time display.
    pub const TIME: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::SHADOW,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::SHADOW,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };
}

const _: () = {
    assert!(spacing::XS == spacing::XXS * 2.0);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::HOVER < opacity::PRESSED);
    assert!(opacity::BAR < 1.0);

    assert!(sizing::TIMELINE_TRACK_ACTIVE > sizing::TIMELINE_TRACK);
    assert!(sizing::SCRUBBER_THUMB > sizing::TIMELINE_TRACK_ACTIVE);
    assert!(sizing::VIDEO_INLINE_WIDTH > sizing::VIDEO_MINI_WIDTH);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::TOOLTIP > typography::TIME);
};
