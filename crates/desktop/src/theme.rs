use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

pub fn app_theme() -> Theme {
    Theme::custom("Facewatch", dark_palette())
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1c, 0x1c, 0x1e),
        text: color!(0xcc, 0xcc, 0xcc),
        primary: color!(0x5e, 0x9f, 0xf5),
        success: color!(0x30, 0xd1, 0x58),
        warning: color!(0xff, 0xcc, 0x00),
        danger: color!(0xff, 0x45, 0x3a),
    }
}

/// Secondary text: the palette's text color at reduced opacity.
pub fn muted_color(theme: &Theme) -> Color {
    Color {
        a: 0.6,
        ..theme.extended_palette().background.base.text
    }
}

pub fn recording_color(theme: &Theme, recording: bool) -> Color {
    let palette = theme.extended_palette();
    if recording {
        palette.success.base.color
    } else {
        palette.danger.base.color
    }
}
