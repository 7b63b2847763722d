//! # Content Blocks
//!
//! Building blocks for section bodies. A section body is an ordered sequence
//! of [`BodyBlock`]s; prose blocks carry [`Inline`] runs so formula tokens
//! and emphasis can sit inside a paragraph or list item.
//!
//! ## Simulation Slots
//!
//! Interactive simulations are not implemented yet. They appear in the body
//! as [`Simulation::Placeholder`] slots; concrete simulator variants can be
//! added to [`Simulation`] later without touching [`BodyBlock`] or the
//! section model.
//!
//! ## Example
//!
//! ```rust
//! use page_core::blocks::{BodyBlock, Inline};
//!
//! let block = BodyBlock::paragraph(vec![
//!     Inline::text("Al lanzar una moneda, "),
//!     Inline::formula("E = {Cara, Cruz}"),
//!     Inline::text("."),
//! ]);
//! assert_eq!(block.block_type(), "Paragraph");
//! ```

use serde::{Deserialize, Serialize};

/// Fixed notice shown inside every simulation placeholder card.
pub const PLACEHOLDER_NOTICE: &str = "[Aquí irá la simulación interactiva]";

/// An opaque piece of mathematical notation.
///
/// Tokens are display strings only: they are never parsed or evaluated.
/// Renderers show them monospace on a highlighted chip. If real notation
/// rendering is ever added, it gets its own AST type; this one stays a
/// plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaToken {
    /// Raw notation text, e.g. `P(A) = casos favorables / casos posibles`
    pub notation: String,
}

impl FormulaToken {
    pub fn new(notation: impl Into<String>) -> Self {
        FormulaToken {
            notation: notation.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.notation
    }
}

/// A run of inline content inside a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Inline {
    /// Plain prose
    Text(String),
    /// Emphasized (italic) text
    Emph(String),
    /// Strong (bold) text
    Strong(String),
    /// Inline formula chip
    Formula(FormulaToken),
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    pub fn emph(text: impl Into<String>) -> Self {
        Inline::Emph(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Strong(text.into())
    }

    pub fn formula(notation: impl Into<String>) -> Self {
        Inline::Formula(FormulaToken::new(notation))
    }
}

/// One item of a [`BodyBlock::List`].
pub type ListItem = Vec<Inline>;

/// List marker kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// Sub-heading depth inside a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Groups several concepts under one banner
    Topic,
    /// Introduces a single concept
    Concept,
}

/// Specification of an interactive simulation: what it is called and what
/// it will show. Purely descriptive today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSpec {
    pub title: String,
    pub description: String,
}

impl SimulationSpec {
    /// Heading shown on the simulation card.
    pub fn heading(&self) -> String {
        format!("Simulación Interactiva: {}", self.title)
    }
}

/// Enum wrapper for simulation slots.
///
/// Only the placeholder variant exists today. When real simulators land,
/// each becomes a new variant carrying its own state/render strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Simulation {
    /// Static card announcing a future interactive widget
    Placeholder(SimulationSpec),
    // Future: CoinFlip(CoinFlipSim),
    // Future: BayesCalculator(BayesSim),
}

impl Simulation {
    pub fn placeholder(title: impl Into<String>, description: impl Into<String>) -> Self {
        Simulation::Placeholder(SimulationSpec {
            title: title.into(),
            description: description.into(),
        })
    }

    /// Descriptive spec for this slot, whatever the variant.
    pub fn spec(&self) -> &SimulationSpec {
        match self {
            Simulation::Placeholder(spec) => spec,
        }
    }

    /// Variant name as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Simulation::Placeholder(_) => "Placeholder",
        }
    }
}

/// One block in a section body.
///
/// Body order is significant: it defines reading order and is fixed at
/// authoring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BodyBlock {
    /// Sub-heading for a topic group or a single concept
    SubHeading { level: HeadingLevel, text: String },
    /// Prose paragraph with inline runs
    Paragraph { content: Vec<Inline> },
    /// Ordered or unordered list
    List { kind: ListKind, items: Vec<ListItem> },
    /// Display formula, rendered centered on its own line
    Formula { display: FormulaToken },
    /// Slot for an interactive simulation
    Simulation { slot: Simulation },
}

impl BodyBlock {
    /// Topic-level sub-heading
    pub fn topic(text: impl Into<String>) -> Self {
        BodyBlock::SubHeading {
            level: HeadingLevel::Topic,
            text: text.into(),
        }
    }

    /// Concept-level sub-heading
    pub fn concept(text: impl Into<String>) -> Self {
        BodyBlock::SubHeading {
            level: HeadingLevel::Concept,
            text: text.into(),
        }
    }

    /// Paragraph of mixed inline content
    pub fn paragraph(content: Vec<Inline>) -> Self {
        BodyBlock::Paragraph { content }
    }

    /// Paragraph of plain text
    pub fn text(text: impl Into<String>) -> Self {
        BodyBlock::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    pub fn unordered(items: Vec<ListItem>) -> Self {
        BodyBlock::List {
            kind: ListKind::Unordered,
            items,
        }
    }

    pub fn ordered(items: Vec<ListItem>) -> Self {
        BodyBlock::List {
            kind: ListKind::Ordered,
            items,
        }
    }

    /// Display formula block
    pub fn formula(notation: impl Into<String>) -> Self {
        BodyBlock::Formula {
            display: FormulaToken::new(notation),
        }
    }

    /// Simulation slot block
    pub fn simulation(slot: Simulation) -> Self {
        BodyBlock::Simulation { slot }
    }

    /// Get the block kind as a string
    pub fn block_type(&self) -> &'static str {
        match self {
            BodyBlock::SubHeading { .. } => "SubHeading",
            BodyBlock::Paragraph { .. } => "Paragraph",
            BodyBlock::List { .. } => "List",
            BodyBlock::Formula { .. } => "Formula",
            BodyBlock::Simulation { .. } => "Simulation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_token_is_opaque() {
        let token = FormulaToken::new("P(A) = casos favorables / casos posibles");
        assert_eq!(token.as_str(), "P(A) = casos favorables / casos posibles");
    }

    #[test]
    fn test_simulation_spec_heading() {
        let sim = Simulation::placeholder("Lanzamiento de Moneda", "Frecuencia relativa de caras.");
        assert_eq!(
            sim.spec().heading(),
            "Simulación Interactiva: Lanzamiento de Moneda"
        );
        assert_eq!(sim.kind(), "Placeholder");
    }

    #[test]
    fn test_block_type_names() {
        assert_eq!(BodyBlock::text("hola").block_type(), "Paragraph");
        assert_eq!(BodyBlock::topic("Conceptos").block_type(), "SubHeading");
        assert_eq!(BodyBlock::formula("P(E) = 1").block_type(), "Formula");
    }

    #[test]
    fn test_body_block_serialization() {
        let block = BodyBlock::unordered(vec![
            vec![Inline::strong("Suceso elemental:"), Inline::text(" un único resultado.")],
            vec![Inline::formula("P(∅) = 0")],
        ]);
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"List\""));
        assert!(json.contains("Unordered"));

        let roundtrip: BodyBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, block);
    }

    #[test]
    fn test_simulation_serialization() {
        let block = BodyBlock::simulation(Simulation::placeholder("X", "Y"));
        let json = serde_json::to_string(&block).unwrap();
        let roundtrip: BodyBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, block);
    }
}
