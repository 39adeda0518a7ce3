/// Hero image carousel
use iced::widget::{button, column, container, image, row, text, Row};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::carousel::CarouselState;
use crate::state::data::image_alt;
use crate::ui::theme::Palette;
use crate::Message;

/// Height of the visible slide
pub const SLIDE_HEIGHT: f32 = 400.0;

/// Load state of one slide image
#[derive(Debug, Clone)]
pub enum SlideImage {
    Loading,
    Loaded(image::Handle),
    /// Download or decode failed; the slide shows its alt text
    Failed(String),
}

pub fn view<'a>(
    carousel: &CarouselState,
    slides: &'a [SlideImage],
    palette: Palette,
) -> Element<'a, Message> {
    let index = carousel.index();

    let slide: Element<'a, Message> = match slides.get(index) {
        Some(SlideImage::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(SLIDE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(SlideImage::Loading) => placeholder("Loading…".to_string(), palette),
        Some(SlideImage::Failed(_)) | None => placeholder(image_alt(index), palette),
    };

    let previous = button(text("‹").size(28))
        .on_press_maybe(carousel.can_go_previous().then_some(Message::CarouselPrevious))
        .padding([4, 14]);
    let next = button(text("›").size(28))
        .on_press_maybe(carousel.can_go_next().then_some(Message::CarouselNext))
        .padding([4, 14]);

    let dots = (0..carousel.len()).fold(Row::new().spacing(8), |dots, i| {
        let marker = if i == index { "●" } else { "○" };
        dots.push(
            button(text(marker).size(12))
                .on_press(Message::CarouselGoTo(i))
                .style(button::text)
                .padding(2),
        )
    });

    column![
        row![previous, slide, next]
            .spacing(12)
            .align_y(Alignment::Center),
        container(dots).center_x(Length::Fill),
    ]
    .spacing(8)
    .into()
}

fn placeholder<'a>(label: String, palette: Palette) -> Element<'a, Message> {
    container(text(label).size(20).color(palette.muted))
        .width(Length::Fill)
        .height(Length::Fixed(SLIDE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(SLIDE_HEIGHT))
        .style(palette.surface_style())
        .into()
}
