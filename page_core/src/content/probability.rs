//! Section 1: Probabilidad
//!
//! The only fully authored section. Covers random experiments, sample
//! spaces, event types, Laplace's rule, the basic probability properties,
//! union/intersection, conditional probability and independence, and closes
//! with the two frequency-convergence simulation slots.

use crate::blocks::{BodyBlock, Inline, Simulation};
use crate::document::Section;

pub fn section() -> Section {
    Section::new("1. Probabilidad", body())
}

fn body() -> Vec<BodyBlock> {
    let mut blocks = vec![
        BodyBlock::text(
            "La probabilidad es una medida de la certidumbre de que ocurra un evento. \
             Se expresa como un número entre 0 y 1, donde 0 indica imposibilidad y 1 \
             indica certeza total.",
        ),
        BodyBlock::topic("Conceptos Básicos de Probabilidad"),
    ];

    blocks.extend(random_experiment());
    blocks.extend(sample_space());
    blocks.extend(events());
    blocks.extend(laplace_rule());
    blocks.extend(properties());
    blocks.extend(union_intersection());
    blocks.extend(conditional());
    blocks.extend(independence());

    blocks.push(BodyBlock::simulation(Simulation::placeholder(
        "Lanzamiento de Moneda",
        "Visualiza cómo la frecuencia relativa de caras (o cruces) se aproxima a la \
         probabilidad teórica (0.5) a medida que aumenta el número de lanzamientos.",
    )));
    blocks.push(BodyBlock::simulation(Simulation::placeholder(
        "Lanzamiento de Dado",
        "Similar al lanzamiento de moneda, pero con 6 resultados posibles. Visualiza \
         la distribución de frecuencias.",
    )));

    blocks
}

fn random_experiment() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Experimento Aleatorio"),
        BodyBlock::text(
            "Un experimento aleatorio es aquel que, bajo las mismas condiciones \
             iniciales, puede presentar diferentes resultados. No se puede predecir \
             con certeza cuál será el resultado exacto.",
        ),
        BodyBlock::paragraph(vec![Inline::emph("Ejemplos:")]),
        BodyBlock::unordered(vec![
            vec![Inline::text("Lanzar una moneda (puede salir cara o cruz).")],
            vec![Inline::text("Lanzar un dado (puede salir 1, 2, 3, 4, 5 o 6).")],
            vec![Inline::text("Extraer una carta de una baraja.")],
        ]),
    ]
}

fn sample_space() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Espacio Muestral (E)"),
        BodyBlock::text(
            "Es el conjunto de todos los posibles resultados de un experimento \
             aleatorio.",
        ),
        BodyBlock::paragraph(vec![Inline::emph("Ejemplos:")]),
        BodyBlock::unordered(vec![
            vec![
                Inline::text("Al lanzar una moneda, "),
                Inline::formula("E = {Cara, Cruz}"),
                Inline::text("."),
            ],
            vec![
                Inline::text("Al lanzar un dado, "),
                Inline::formula("E = {1, 2, 3, 4, 5, 6}"),
                Inline::text("."),
            ],
        ]),
    ]
}

fn events() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Suceso"),
        BodyBlock::text(
            "Un suceso es cualquier subconjunto del espacio muestral. Es decir, es \
             uno o varios de los posibles resultados.",
        ),
        BodyBlock::paragraph(vec![Inline::emph("Tipos de sucesos:")]),
        BodyBlock::unordered(vec![
            vec![
                Inline::strong("Suceso elemental:"),
                Inline::text(" Formado por un único resultado del espacio muestral."),
            ],
            vec![
                Inline::strong("Suceso compuesto:"),
                Inline::text(" Formado por dos o más sucesos elementales."),
            ],
            vec![
                Inline::strong("Suceso seguro:"),
                Inline::text(" Es el propio espacio muestral (E). Siempre ocurre."),
            ],
            vec![
                Inline::strong("Suceso imposible (∅):"),
                Inline::text(" Es el conjunto vacío. Nunca ocurre."),
            ],
            vec![
                Inline::strong("Suceso contrario (o complementario) de A (Ā o A'):"),
                Inline::text(" Es el suceso que ocurre cuando no ocurre A."),
            ],
        ]),
    ]
}

fn laplace_rule() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Definición de Probabilidad (Regla de Laplace)"),
        BodyBlock::text(
            "Si todos los sucesos elementales de un experimento aleatorio son \
             equiprobables, la probabilidad de un suceso A se calcula como:",
        ),
        BodyBlock::formula("P(A) = casos favorables a A / casos posibles"),
    ]
}

fn properties() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Propiedades de la Probabilidad"),
        BodyBlock::ordered(vec![
            vec![Inline::formula("0 ≤ P(A) ≤ 1")],
            vec![Inline::formula("P(E) = 1")],
            vec![Inline::formula("P(∅) = 0")],
            vec![Inline::formula("P(Ā) = 1 − P(A)")],
        ]),
    ]
}

fn union_intersection() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Unión e Intersección de Sucesos"),
        BodyBlock::paragraph(vec![
            Inline::text("Unión ("),
            Inline::formula("A ∪ B"),
            Inline::text("): \"ocurre A o ocurre B o ambos\"."),
        ]),
        BodyBlock::paragraph(vec![
            Inline::text("Intersección ("),
            Inline::formula("A ∩ B"),
            Inline::text("): \"ocurre A y ocurre B\"."),
        ]),
        BodyBlock::formula("P(A ∪ B) = P(A) + P(B) − P(A ∩ B)"),
        BodyBlock::paragraph(vec![
            Inline::text("Si A y B son incompatibles ("),
            Inline::formula("A ∩ B = ∅"),
            Inline::text("), entonces "),
            Inline::formula("P(A ∪ B) = P(A) + P(B)"),
            Inline::text("."),
        ]),
    ]
}

fn conditional() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Probabilidad Condicionada"),
        BodyBlock::paragraph(vec![
            Inline::formula("P(A|B) = P(A ∩ B) / P(B)"),
            Inline::text(", si "),
            Inline::formula("P(B) > 0"),
            Inline::text("."),
        ]),
        BodyBlock::paragraph(vec![
            Inline::text("Regla de la multiplicación: "),
            Inline::formula("P(A ∩ B) = P(B) · P(A|B)"),
        ]),
    ]
}

fn independence() -> Vec<BodyBlock> {
    vec![
        BodyBlock::concept("Sucesos Independientes"),
        BodyBlock::paragraph(vec![
            Inline::text("Si A y B son independientes: "),
            Inline::formula("P(A ∩ B) = P(A) · P(B)"),
            Inline::text("."),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{HeadingLevel, ListKind};

    fn the_section() -> Section {
        section()
    }

    #[test]
    fn test_section_title() {
        assert_eq!(the_section().title, "1. Probabilidad");
    }

    #[test]
    fn test_event_type_list_has_five_entries() {
        let section = the_section();
        let event_list = section
            .body
            .iter()
            .filter_map(|block| match block {
                BodyBlock::List { kind: ListKind::Unordered, items } => Some(items),
                _ => None,
            })
            .find(|items| items.len() >= 5)
            .expect("event-type list present");

        assert_eq!(event_list.len(), 5);
        let leads: Vec<_> = event_list
            .iter()
            .filter_map(|item| match item.first() {
                Some(Inline::Strong(text)) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(leads[0].contains("elemental"));
        assert!(leads[1].contains("compuesto"));
        assert!(leads[2].contains("seguro"));
        assert!(leads[3].contains("imposible"));
        assert!(leads[4].contains("contrario"));
    }

    #[test]
    fn test_properties_list_has_exactly_four_entries() {
        let section = the_section();
        let ordered: Vec<_> = section
            .body
            .iter()
            .filter_map(|block| match block {
                BodyBlock::List { kind: ListKind::Ordered, items } => Some(items),
                _ => None,
            })
            .collect();

        assert_eq!(ordered.len(), 1, "exactly one ordered list");
        assert_eq!(ordered[0].len(), 4);
    }

    #[test]
    fn test_laplace_formula_follows_its_paragraph() {
        let section = the_section();
        let laplace_heading = section
            .body
            .iter()
            .position(|block| {
                matches!(block, BodyBlock::SubHeading { text, .. } if text.contains("Laplace"))
            })
            .expect("Laplace heading present");

        assert!(matches!(
            &section.body[laplace_heading + 1],
            BodyBlock::Paragraph { .. }
        ));
        match &section.body[laplace_heading + 2] {
            BodyBlock::Formula { display } => {
                assert!(display.as_str().contains("casos favorables"));
            }
            other => panic!("expected display formula, got {}", other.block_type()),
        }
    }

    #[test]
    fn test_concept_headings_in_order() {
        let section = the_section();
        let concepts: Vec<_> = section
            .body
            .iter()
            .filter_map(|block| match block {
                BodyBlock::SubHeading { level: HeadingLevel::Concept, text } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();

        assert_eq!(
            concepts,
            vec![
                "Experimento Aleatorio",
                "Espacio Muestral (E)",
                "Suceso",
                "Definición de Probabilidad (Regla de Laplace)",
                "Propiedades de la Probabilidad",
                "Unión e Intersección de Sucesos",
                "Probabilidad Condicionada",
                "Sucesos Independientes",
            ]
        );
    }

    #[test]
    fn test_two_simulations_close_the_section() {
        let section = the_section();
        let sims = section.simulations();
        assert_eq!(sims.len(), 2);
        assert_eq!(sims[0].spec().title, "Lanzamiento de Moneda");
        assert_eq!(sims[1].spec().title, "Lanzamiento de Dado");

        // They are the last two body blocks
        let tail: Vec<_> = section
            .body
            .iter()
            .rev()
            .take(2)
            .map(BodyBlock::block_type)
            .collect();
        assert_eq!(tail, vec!["Simulation", "Simulation"]);
    }
}
