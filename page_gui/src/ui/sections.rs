//! Main content region
//!
//! Renders the intro paragraph and the five topic section cards, and
//! dispatches each body block to its widget:
//! - SubHeading -> sized/colored text by level
//! - Paragraph -> wrapped rich text (shared/rich)
//! - List -> marker column, ordered or unordered
//! - Formula -> centered display chip
//! - Simulation -> simulation_card

use iced::widget::{container, row, text, Column};
use iced::{Element, Length, Padding};

use page_core::blocks::{BodyBlock, HeadingLevel, ListItem, ListKind};
use page_core::document::{Document, Section};

use super::shared::{palette, rich};
use super::simulation_card;
use crate::Message;

/// Content column width cap; the column centers inside wider windows
const CONTENT_MAX_WIDTH: f32 = 900.0;

/// Render the main region: intro paragraph, then every section in order
pub fn view(doc: &Document) -> Element<'_, Message> {
    let mut content = Column::new().spacing(32).max_width(CONTENT_MAX_WIDTH);

    content = content.push(
        container(rich::inlines(&doc.intro, 16.0)).padding(Padding {
            top: 0.0,
            right: 24.0,
            bottom: 16.0,
            left: 24.0,
        }),
    );

    for section in &doc.sections {
        content = content.push(section_card(section));
    }

    container(content)
        .center_x(Length::Fill)
        .padding(Padding::from([32, 16]))
        .into()
}

/// Render one titled section card with its body blocks in order
fn section_card(section: &Section) -> Element<'_, Message> {
    let mut body = Column::new().spacing(14);

    body = body.push(text(&section.title).size(26).color(palette::violet()));
    body = body.push(iced::widget::rule::horizontal(2));

    for block in &section.body {
        body = body.push(block_view(block));
    }

    container(body)
        .width(Length::Fill)
        .padding(24)
        .style(palette::section_card)
        .into()
}

fn block_view(block: &BodyBlock) -> Element<'_, Message> {
    match block {
        BodyBlock::SubHeading { level, text: heading } => {
            let (size, color) = match level {
                HeadingLevel::Topic => (20.0, palette::orange()),
                HeadingLevel::Concept => (17.0, palette::violet()),
            };
            text(heading).size(size).color(color).into()
        }
        BodyBlock::Paragraph { content } => rich::inlines(content, 14.0),
        BodyBlock::List { kind, items } => list_view(*kind, items),
        BodyBlock::Formula { display } => container(rich::formula_chip(display.as_str(), 14.0))
            .center_x(Length::Fill)
            .into(),
        BodyBlock::Simulation { slot } => simulation_card::view(slot),
    }
}

fn list_view(kind: ListKind, items: &[ListItem]) -> Element<'_, Message> {
    let mut list = Column::new().spacing(6);

    for (index, item) in items.iter().enumerate() {
        let marker = match kind {
            ListKind::Unordered => "•".to_string(),
            ListKind::Ordered => format!("{}.", index + 1),
        };
        list = list.push(
            row![
                text(marker).size(14).width(Length::Fixed(24.0)),
                rich::inlines(item, 14.0),
            ]
            .spacing(4),
        );
    }

    container(list)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 16.0,
        })
        .into()
}
