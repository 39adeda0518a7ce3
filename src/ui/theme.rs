/// Page colors
///
/// The light palette follows the page's blue-to-purple look; the dark
/// palette keeps the same accents on darker surfaces.
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Color, Gradient, Radians, Theme};

use crate::state::settings::ThemeChoice;

/// Convert a 0xRRGGBB value into a color
pub fn hex(rgb: u32) -> Color {
    Color::from_rgb8(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background_top: Color,
    pub background_bottom: Color,
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
    pub surface: Color,
    pub border: Color,
    pub paw: Color,
}

impl Palette {
    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self {
                background_top: hex(0xDBEAFE),
                background_bottom: hex(0xF3E8FF),
                heading: hex(0x6B21A8),
                body: hex(0x374151),
                muted: hex(0x9CA3AF),
                surface: Color::WHITE,
                border: hex(0xE5E7EB),
                paw: Color::from_rgba8(0x6B, 0x21, 0xA8, 0.6),
            },
            ThemeChoice::Dark => Self {
                background_top: hex(0x1E293B),
                background_bottom: hex(0x2E1065),
                heading: hex(0xD8B4FE),
                body: hex(0xE5E7EB),
                muted: hex(0x9CA3AF),
                surface: hex(0x1F2937),
                border: hex(0x374151),
                paw: Color::from_rgba8(0xD8, 0xB4, 0xFE, 0.6),
            },
        }
    }

    pub fn iced_theme(choice: ThemeChoice) -> Theme {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }

    /// Vertical gradient behind the whole page
    pub fn page_style(self) -> impl Fn(&Theme) -> container::Style {
        move |_theme| container::Style {
            background: Some(Background::Gradient(Gradient::Linear(
                Linear::new(Radians(std::f32::consts::PI))
                    .add_stop(0.0, self.background_top)
                    .add_stop(1.0, self.background_bottom),
            ))),
            ..Default::default()
        }
    }

    /// Raised surface used by the toast and image placeholders
    pub fn surface_style(self) -> impl Fn(&Theme) -> container::Style {
        move |_theme| container::Style {
            background: Some(Background::Color(self.surface)),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: self.border,
            },
            shadow: iced::Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        }
    }
}

/// Apply an opacity factor to a color
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
