//! Footer strip
//!
//! Copyright line (year injected when the document was built) and the
//! attribution line, centered on the banner background.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Padding};

use page_core::document::Footer;

use super::shared::palette;
use crate::Message;

/// Render the footer strip
pub fn view(footer: &Footer) -> Element<'_, Message> {
    let lines = column![
        text(footer.copyright_line()).size(12).color(palette::muted()),
        text(&footer.attribution).size(12).color(palette::muted()),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    container(lines)
        .center_x(Length::Fill)
        .padding(Padding::from([24, 0]))
        .style(palette::banner)
        .into()
}
