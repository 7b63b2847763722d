//! Sections 2-5: stubs awaiting external content
//!
//! Each renders a single placeholder line naming the external source
//! document the content will be taken from, plus one simulation slot. The
//! sources are referenced by name only; nothing is fetched at build or run
//! time.

use crate::blocks::{BodyBlock, Simulation};
use crate::document::Section;

/// An external content document, referenced by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalSource {
    /// Topic label used in the stub paragraph
    pub topic: &'static str,
    /// Source file the content will be taken from
    pub file: &'static str,
}

impl ExternalSource {
    /// The stub line shown until the real content is integrated.
    pub fn stub_line(&self) -> String {
        format!("Contenido de {}... (Tomado de {})", self.topic, self.file)
    }
}

pub const BAYES: ExternalSource = ExternalSource {
    topic: "Teorema de Bayes",
    file: "bayes.md",
};

pub const SAMPLE_MEANS: ExternalSource = ExternalSource {
    topic: "Distribuciones de Medias Muestrales",
    file: "distribuciones_medias_muestrales.md",
};

pub const CONFIDENCE_INTERVALS: ExternalSource = ExternalSource {
    topic: "Intervalos de Confianza",
    file: "intervalos_confianza.md",
};

pub const INFERENCE: ExternalSource = ExternalSource {
    topic: "Inferencia Estadística",
    file: "inferencia_estadistica.md",
};

fn stub_section(title: &str, source: ExternalSource, slot: Simulation) -> Section {
    Section::new(
        title,
        vec![
            BodyBlock::text(source.stub_line()),
            BodyBlock::simulation(slot),
        ],
    )
}

pub fn bayes() -> Section {
    stub_section(
        "2. Teorema de Bayes",
        BAYES,
        Simulation::placeholder(
            "Escenario de Diagnóstico Médico",
            "Explora cómo cambian las probabilidades a posteriori al modificar las \
             probabilidades a priori y las verosimilitudes.",
        ),
    )
}

pub fn sample_means() -> Section {
    stub_section(
        "3. Distribuciones de Medias Muestrales",
        SAMPLE_MEANS,
        Simulation::placeholder(
            "Explorador del Teorema Central del Límite",
            "Visualiza cómo la distribución de las medias muestrales tiende a la \
             normalidad a medida que aumenta el tamaño de la muestra.",
        ),
    )
}

pub fn confidence_intervals() -> Section {
    stub_section(
        "4. Intervalos de Confianza para la Media",
        CONFIDENCE_INTERVALS,
        Simulation::placeholder(
            "Explorador de Intervalos de Confianza",
            "Visualiza cómo se construyen los intervalos de confianza y cómo \
             diferentes factores afectan su amplitud.",
        ),
    )
}

pub fn inference() -> Section {
    stub_section(
        "5. Inferencia Estadística (Pruebas de Hipótesis)",
        INFERENCE,
        Simulation::placeholder(
            "Visualizador de p-valor y Región de Rechazo",
            "Comprende la relación entre el estadístico de prueba, el p-valor, y la \
             región de rechazo.",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_stub_has_exactly_one_simulation() {
        for section in [bayes(), sample_means(), confidence_intervals(), inference()] {
            assert_eq!(section.simulations().len(), 1, "{}", section.title);
            assert_eq!(section.body.len(), 2);
        }
    }

    #[test]
    fn test_stub_simulation_titles() {
        assert_eq!(
            bayes().simulations()[0].spec().title,
            "Escenario de Diagnóstico Médico"
        );
        assert_eq!(
            sample_means().simulations()[0].spec().title,
            "Explorador del Teorema Central del Límite"
        );
        assert_eq!(
            confidence_intervals().simulations()[0].spec().title,
            "Explorador de Intervalos de Confianza"
        );
        assert_eq!(
            inference().simulations()[0].spec().title,
            "Visualizador de p-valor y Región de Rechazo"
        );
    }

    #[test]
    fn test_stub_line_names_source_file() {
        assert_eq!(
            BAYES.stub_line(),
            "Contenido de Teorema de Bayes... (Tomado de bayes.md)"
        );
        let section = sample_means();
        match &section.body[0] {
            BodyBlock::Paragraph { content } => {
                let text = format!("{:?}", content);
                assert!(text.contains("distribuciones_medias_muestrales.md"));
            }
            other => panic!("expected stub paragraph, got {}", other.block_type()),
        }
    }
}
