//! Inline-run rendering
//!
//! Converts the model's inline runs (prose, emphasis, formula tokens) into
//! a single wrapped rich-text widget. Formula tokens render monospace on a
//! highlighted chip; they are opaque strings, never interpreted.

use iced::widget::text::Span;
use iced::widget::{rich_text, span};
use iced::{border, font, Element, Font, Padding};

use page_core::blocks::Inline;

use super::palette;
use crate::Message;

fn italic() -> Font {
    Font {
        style: font::Style::Italic,
        ..Font::DEFAULT
    }
}

fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

fn formula_span(notation: &str) -> Span<'_> {
    span(notation)
        .font(Font::MONOSPACE)
        .color(palette::chip_text())
        .background(palette::chip_background())
        .border(border::rounded(3.0))
        .padding(Padding::from([0, 4]))
}

fn to_span(inline: &Inline) -> Span<'_> {
    match inline {
        Inline::Text(text) => span(text.as_str()),
        Inline::Emph(text) => span(text.as_str()).font(italic()),
        Inline::Strong(text) => span(text.as_str()).font(bold()),
        Inline::Formula(token) => formula_span(token.as_str()),
    }
}

/// Render a run of inlines as one wrapped paragraph.
pub fn inlines(content: &[Inline], size: f32) -> Element<'_, Message> {
    let spans: Vec<Span<'_>> = content.iter().map(to_span).collect();
    rich_text(spans).size(size).into()
}

/// Render a single formula chip, for display-formula blocks.
pub fn formula_chip(notation: &str, size: f32) -> Element<'_, Message> {
    rich_text(vec![formula_span(notation)]).size(size).into()
}
