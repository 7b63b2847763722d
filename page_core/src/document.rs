//! # Page Document Model
//!
//! The `Document` struct is the root container for one render of the page.
//! It is assembled from authored content plus the injected clock, handed to
//! a renderer, and discarded; nothing is mutated after construction.
//!
//! ## Structure
//!
//! ```text
//! Document
//! ├── meta: PageMetadata (title, description, icon)
//! ├── header: Header (banner title + branding assets)
//! ├── intro: Vec<Inline> (welcome paragraph)
//! ├── sections: Vec<Section> (the five topics, in reading order)
//! └── footer: Footer (copyright year, attribution)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use page_core::clock::FixedClock;
//!
//! let doc = page_core::content::document(&FixedClock::for_year(2025));
//! assert_eq!(doc.sections.len(), 5);
//! assert_eq!(doc.footer.year, 2025);
//!
//! // Serialize to JSON for inspection or tooling
//! let json = serde_json::to_string_pretty(&doc).unwrap();
//! assert!(json.contains("Probabilidad"));
//! ```

use serde::{Deserialize, Serialize};

use crate::blocks::{BodyBlock, Inline, Simulation};
use crate::clock::Clock;

/// Page metadata: window title in the GUI, `<head>` content in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Logical asset name of the page icon
    pub icon: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        PageMetadata {
            title: "La Bruja de las Mates® - Probabilidad y Estadística".to_string(),
            description: "Página web interactiva sobre probabilidad y estadística \
                          para bachillerato y secundaria."
                .to_string(),
            icon: "logo1.svg".to_string(),
        }
    }
}

/// Branding image assets, by logical file name.
///
/// Resolution is the renderer's concern: the GUI looks these up in its
/// embedded asset set, the HTML export references them by relative path.
/// A name that fails to resolve degrades to a text label; it never removes
/// surrounding content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub primary_logo: String,
    /// Hidden on narrow viewports
    pub secondary_logo: String,
    pub mascot: String,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            primary_logo: "logo1.svg".to_string(),
            secondary_logo: "logo2.svg".to_string(),
            mascot: "mascota.svg".to_string(),
        }
    }
}

/// Banner region at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Display title, branding left / mascot right around it
    pub title: String,
    pub branding: Branding,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Header {
            title: title.into(),
            branding: Branding::default(),
        }
    }
}

/// Bottom strip with the copyright line and attribution.
///
/// The year is the one dynamic value on the whole page; it is read from the
/// injected [`Clock`] when the footer is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub year: i32,
    pub holder: String,
    pub attribution: String,
}

impl Footer {
    pub fn new(clock: &dyn Clock) -> Self {
        Footer {
            year: clock.year(),
            holder: "La Bruja de las Mates®".to_string(),
            attribution: "Desarrollado con fines educativos.".to_string(),
        }
    }

    /// Full copyright line, e.g. `© 2025 La Bruja de las Mates®. Todos los
    /// derechos reservados.`
    pub fn copyright_line(&self) -> String {
        format!(
            "© {} {}. Todos los derechos reservados.",
            self.year, self.holder
        )
    }
}

/// One titled topic section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Body blocks in reading order, fixed at authoring time
    pub body: Vec<BodyBlock>,
}

impl Section {
    /// Create a section. Titles are never empty.
    pub fn new(title: impl Into<String>, body: Vec<BodyBlock>) -> Self {
        let title = title.into();
        debug_assert!(!title.is_empty(), "section titles must be non-empty");
        Section { title, body }
    }

    /// All simulation slots in this section, in body order.
    pub fn simulations(&self) -> Vec<&Simulation> {
        self.body
            .iter()
            .filter_map(|block| match block {
                BodyBlock::Simulation { slot } => Some(slot),
                _ => None,
            })
            .collect()
    }
}

/// Root container for one render of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub meta: PageMetadata,
    pub header: Header,
    /// Welcome paragraph shown above the sections
    pub intro: Vec<Inline>,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

impl Document {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Section titles in reading order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_footer_copyright_line() {
        let footer = Footer::new(&FixedClock::for_year(2025));
        assert_eq!(
            footer.copyright_line(),
            "© 2025 La Bruja de las Mates®. Todos los derechos reservados."
        );
    }

    #[test]
    fn test_footer_year_tracks_clock() {
        assert_eq!(Footer::new(&FixedClock::for_year(2030)).year, 2030);
    }

    #[test]
    fn test_section_simulations_filter() {
        let section = Section::new(
            "Demo",
            vec![
                BodyBlock::text("prosa"),
                BodyBlock::simulation(Simulation::placeholder("A", "a")),
                BodyBlock::formula("P(E) = 1"),
                BodyBlock::simulation(Simulation::placeholder("B", "b")),
            ],
        );
        let sims = section.simulations();
        assert_eq!(sims.len(), 2);
        assert_eq!(sims[0].spec().title, "A");
        assert_eq!(sims[1].spec().title, "B");
    }

    #[test]
    fn test_document_serialization() {
        let doc = crate::content::document(&FixedClock::for_year(2025));
        let json = serde_json::to_string_pretty(&doc).unwrap();

        assert!(json.contains("La Bruja de las Mates®"));
        assert!(json.contains("1. Probabilidad"));

        let roundtrip: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, doc);
    }
}
