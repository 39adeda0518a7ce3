/// Breed cards for the "Popular Cat Breeds" section
use iced::widget::{column, text, Column};
use iced::{Element, Length};
use iced_aw::Card;

use crate::state::data::BreedRecord;
use crate::ui::theme::Palette;
use crate::Message;

/// A single card: breed name as the header, description as the body
pub fn card<'a>(breed: &BreedRecord) -> Element<'a, Message> {
    Card::new(
        text(breed.name).size(24),
        text(breed.description).size(18),
    )
    .width(Length::Fill)
    .into()
}

/// Cards for every visible breed, or a note when nothing matches
pub fn list<'a>(breeds: &[&BreedRecord], palette: Palette) -> Element<'a, Message> {
    if breeds.is_empty() {
        return column![text("No breeds match your search.").size(18).color(palette.muted)].into();
    }

    breeds
        .iter()
        .fold(Column::new().spacing(16), |list, breed| list.push(card(breed)))
        .into()
}
