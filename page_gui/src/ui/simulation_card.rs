//! Simulation placeholder card
//!
//! Distinct bordered card marking where an interactive simulation will be
//! embedded: simulation name, description in italics, and the fixed
//! not-yet-available notice. Rendered the same for every slot regardless of
//! its title or description.

use iced::widget::{column, container, text};
use iced::{font, Element, Font, Length};

use page_core::blocks::{Simulation, PLACEHOLDER_NOTICE};

use super::shared::palette;
use crate::Message;

/// Render a placeholder card for a simulation slot
pub fn view(slot: &Simulation) -> Element<'_, Message> {
    let spec = slot.spec();

    let italic = Font {
        style: font::Style::Italic,
        ..Font::DEFAULT
    };

    let card = column![
        text(spec.heading()).size(17).color(palette::green()),
        text(&spec.description)
            .size(13)
            .font(italic)
            .color(palette::muted()),
        container(text(PLACEHOLDER_NOTICE).size(13).color(palette::orange()))
            .center_x(Length::Fill),
    ]
    .spacing(10);

    container(card)
        .width(Length::Fill)
        .padding(16)
        .style(palette::simulation_card)
        .into()
}
