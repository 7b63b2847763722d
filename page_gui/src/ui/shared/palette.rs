//! Brand palette and container styles
//!
//! Colors mirror the page's brand scheme: violet headings, orange accents,
//! green simulation borders, dark gray surfaces.

use iced::widget::container;
use iced::{Border, Color, Theme};

pub fn violet() -> Color {
    Color::from_rgb8(0x8b, 0x5c, 0xf6)
}

pub fn orange() -> Color {
    Color::from_rgb8(0xf9, 0x73, 0x16)
}

pub fn green() -> Color {
    Color::from_rgb8(0x22, 0xc5, 0x5e)
}

pub fn page_background() -> Color {
    Color::from_rgb8(0x18, 0x18, 0x1b)
}

pub fn banner_background() -> Color {
    Color::from_rgb8(0x09, 0x09, 0x0b)
}

pub fn surface() -> Color {
    Color::from_rgb8(0x27, 0x27, 0x2a)
}

pub fn chip_background() -> Color {
    Color::from_rgb8(0x3f, 0x3f, 0x46)
}

pub fn chip_text() -> Color {
    Color::from_rgb8(0xfa, 0xfa, 0xfa)
}

pub fn body_text() -> Color {
    Color::from_rgb8(0xd4, 0xd4, 0xd8)
}

pub fn muted() -> Color {
    Color::from_rgb8(0xa1, 0xa1, 0xaa)
}

/// Application theme built from the brand colors
pub fn theme() -> Theme {
    Theme::custom(
        "Brujamat".to_string(),
        iced::theme::Palette {
            background: page_background(),
            text: body_text(),
            primary: violet(),
            success: green(),
            warning: orange(),
            danger: Color::from_rgb8(0xef, 0x44, 0x44),
        },
    )
}

/// Banner style for the header and footer strips
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(banner_background().into()),
        ..container::Style::default()
    }
}

/// Card style for topic sections
pub fn section_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(surface().into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Bordered card for simulation placeholders
pub fn simulation_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb8(0x1c, 0x1c, 0x1f).into()),
        border: Border {
            color: green(),
            width: 2.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}
