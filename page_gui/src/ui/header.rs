//! Header banner
//!
//! Branding row: primary logo, secondary logo, and page title on the left;
//! mascot on the right. The secondary logo is hidden on narrow windows.
//! A branding image that fails to resolve degrades to a text label so the
//! banner never loses its surrounding content.

use iced::widget::{container, row, svg, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use page_core::document::Header;

use super::shared::palette;
use crate::{assets, Message};

/// Whether the secondary logo fits at the given window width
pub fn shows_secondary_logo(window_width: f32) -> bool {
    window_width >= crate::NARROW_VIEWPORT_PX
}

/// Render the header banner
pub fn view(header: &Header, window_width: f32) -> Element<'_, Message> {
    let branding = &header.branding;

    let mut marca: Row<'_, Message> = row![brand_image(&branding.primary_logo, 60.0, 60.0)]
        .spacing(16)
        .align_y(Alignment::Center);

    if shows_secondary_logo(window_width) {
        marca = marca.push(brand_image(&branding.secondary_logo, 150.0, 50.0));
    }

    marca = marca.push(text(&header.title).size(34).color(palette::violet()));

    let banner = row![
        marca,
        Space::new().width(Length::Fill),
        brand_image(&branding.mascot, 80.0, 80.0),
    ]
    .align_y(Alignment::Center);

    container(banner)
        .width(Length::Fill)
        .padding(Padding::from([24, 32]))
        .style(palette::banner)
        .into()
}

/// Branding image by logical name, or its name as a text fallback
fn brand_image(name: &str, width: f32, height: f32) -> Element<'static, Message> {
    match assets::svg_handle(name) {
        Some(handle) => svg(handle)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into(),
        None => text(name.to_string()).size(11).color(palette::muted()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_logo_cutoff() {
        assert!(shows_secondary_logo(1280.0));
        assert!(shows_secondary_logo(640.0));
        assert!(!shows_secondary_logo(639.0));
        assert!(!shows_secondary_logo(360.0));
    }
}
