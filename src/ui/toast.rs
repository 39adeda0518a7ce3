/// Toast notification widget
///
/// Floating card with an accent bar, a title, the message and a close button.
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::state::toast::Toast;
use crate::ui::theme::{hex, Palette};
use crate::Message;

const ACCENT: u32 = 0x6B21A8;

pub fn view<'a>(toast: &Toast, palette: Palette) -> Element<'a, Message> {
    let accent_bar = container(Space::new(Length::Fixed(3.0), Length::Fixed(36.0))).style(
        |_theme| container::Style {
            background: Some(iced::Background::Color(hex(ACCENT))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    );

    let body = column![
        text(toast.title.clone()).size(15).color(palette.heading),
        text(toast.description.clone()).size(13).color(palette.body),
    ]
    .spacing(2);

    let close = button(text("×").size(16))
        .on_press(Message::DismissToast(toast.id))
        .style(button::text)
        .padding(2);

    let content = row![accent_bar, body, Space::with_width(Length::Fixed(12.0)), close]
        .spacing(12)
        .align_y(Alignment::Center)
        .padding(Padding::new(14.0).left(12.0).right(12.0));

    container(content)
        .max_width(420.0)
        .style(palette.surface_style())
        .into()
}
