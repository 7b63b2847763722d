//! # Page Content
//!
//! The authored content of the page: one welcome paragraph and five topic
//! sections in fixed reading order. Section 1 (Probabilidad) is fully
//! authored; sections 2-5 are stubs whose content will be taken from
//! external source documents once integrated.
//!
//! Content is fixed at authoring time. [`document`] rebuilds the model on
//! every call and retains nothing; the injected clock is the only input
//! that can change the result (the footer year).

pub mod probability;
pub mod stubs;

use crate::blocks::Inline;
use crate::clock::Clock;
use crate::document::{Document, Footer, Header, PageMetadata, Section};

/// Display title shown in the header banner
const PAGE_TITLE: &str = "La Bruja de las Mates®";

/// Welcome paragraph shown above the sections
const INTRO: &str = "Bienvenido/a a esta plataforma interactiva donde exploraremos los \
    fascinantes conceptos de la probabilidad y la estadística, diseñada especialmente \
    para estudiantes de bachillerato. ¡Prepárate para aprender de forma visual y \
    atractiva!";

/// Assemble the full page document.
///
/// # Example
///
/// ```rust
/// use page_core::clock::FixedClock;
///
/// let doc = page_core::content::document(&FixedClock::for_year(2025));
/// assert_eq!(doc.footer.year, 2025);
/// ```
pub fn document(clock: &dyn Clock) -> Document {
    Document {
        meta: PageMetadata::default(),
        header: Header::new(PAGE_TITLE),
        intro: vec![Inline::text(INTRO)],
        sections: sections(),
        footer: Footer::new(clock),
    }
}

/// The five topic sections in reading order.
pub fn sections() -> Vec<Section> {
    vec![
        probability::section(),
        stubs::bayes(),
        stubs::sample_means(),
        stubs::confidence_intervals(),
        stubs::inference(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_five_sections_in_fixed_order() {
        let doc = document(&FixedClock::for_year(2025));
        assert_eq!(doc.section_count(), 5);
        assert_eq!(
            doc.section_titles(),
            vec![
                "1. Probabilidad",
                "2. Teorema de Bayes",
                "3. Distribuciones de Medias Muestrales",
                "4. Intervalos de Confianza para la Media",
                "5. Inferencia Estadística (Pruebas de Hipótesis)",
            ]
        );
    }

    #[test]
    fn test_rebuild_is_identical_for_same_clock() {
        let clock = FixedClock::for_year(2025);
        assert_eq!(document(&clock), document(&clock));
    }

    #[test]
    fn test_rebuild_differs_only_in_footer_year() {
        let mut doc_2025 = document(&FixedClock::for_year(2025));
        let doc_2030 = document(&FixedClock::for_year(2030));

        assert_ne!(doc_2025, doc_2030);
        doc_2025.footer.year = 2030;
        assert_eq!(doc_2025, doc_2030);
    }

    #[test]
    fn test_intro_precedes_sections() {
        let doc = document(&FixedClock::for_year(2025));
        match &doc.intro[0] {
            Inline::Text(text) => assert!(text.starts_with("Bienvenido/a")),
            other => panic!("expected plain intro text, got {:?}", other),
        }
    }

    #[test]
    fn test_simulation_slot_totals() {
        let doc = document(&FixedClock::for_year(2025));
        let counts: Vec<_> = doc
            .sections
            .iter()
            .map(|s| s.simulations().len())
            .collect();
        assert_eq!(counts, vec![2, 1, 1, 1, 1]);
    }
}
