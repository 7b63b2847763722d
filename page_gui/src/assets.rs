//! Embedded branding assets
//!
//! The three header images ship inside the binary via rust-embed, so the
//! viewer needs no asset pipeline at runtime. Lookups return `None` for
//! names that fail to resolve; callers degrade to a text label so a
//! missing asset never drops surrounding content.

use iced::widget::svg;
use once_cell::sync::Lazy;
use page_core::errors::PageError;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct BrandAssets;

static PRIMARY_LOGO: Lazy<Option<svg::Handle>> = Lazy::new(|| load("logo1.svg"));
static SECONDARY_LOGO: Lazy<Option<svg::Handle>> = Lazy::new(|| load("logo2.svg"));
static MASCOT: Lazy<Option<svg::Handle>> = Lazy::new(|| load("mascota.svg"));

fn load(name: &str) -> Option<svg::Handle> {
    match BrandAssets::get(name) {
        Some(file) => Some(svg::Handle::from_memory(file.data)),
        None => {
            let err = PageError::asset_unavailable(name);
            tracing::warn!(%err, "falling back to text label");
            None
        }
    }
}

/// Embedded SVG handle by logical asset name.
pub fn svg_handle(name: &str) -> Option<svg::Handle> {
    match name {
        "logo1.svg" => PRIMARY_LOGO.clone(),
        "logo2.svg" => SECONDARY_LOGO.clone(),
        "mascota.svg" => MASCOT.clone(),
        other => load(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_assets_are_embedded() {
        assert!(svg_handle("logo1.svg").is_some());
        assert!(svg_handle("logo2.svg").is_some());
        assert!(svg_handle("mascota.svg").is_some());
    }

    #[test]
    fn test_unknown_asset_degrades_to_none() {
        assert!(svg_handle("no_such_asset.svg").is_none());
    }
}
