//! # page_core - Probability & Statistics Page Content Engine
//!
//! `page_core` holds the content model and authored content for the
//! "La Bruja de las Mates" probability and statistics page, plus a static
//! HTML export. Renderers (the iced GUI, the export binary) consume the
//! same document model.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the document is rebuilt per render and retained nowhere
//! - **JSON-First**: all model types implement Serialize/Deserialize
//! - **Deterministic**: the clock is injected; same year in, same page out
//! - **Rich Errors**: structured error types at the I/O edges
//!
//! ## Quick Start
//!
//! ```rust
//! use page_core::clock::FixedClock;
//!
//! let doc = page_core::content::document(&FixedClock::for_year(2025));
//! assert_eq!(doc.sections.len(), 5);
//!
//! let html = page_core::export::render_html(&doc);
//! assert!(html.contains("1. Probabilidad"));
//! ```
//!
//! ## Modules
//!
//! - [`document`] - Document container, header/footer, sections
//! - [`blocks`] - Body block and inline content types, simulation slots
//! - [`content`] - The authored page content
//! - [`clock`] - Injected time source for the footer year
//! - [`export`] - Standalone HTML rendering with atomic saves
//! - [`errors`] - Structured error types

pub mod blocks;
pub mod clock;
pub mod content;
pub mod document;
pub mod errors;
pub mod export;

// Re-export commonly used types at crate root for convenience
pub use blocks::{BodyBlock, FormulaToken, Inline, Simulation, SimulationSpec};
pub use clock::{Clock, FixedClock, SystemClock};
pub use document::{Document, Footer, Header, PageMetadata, Section};
pub use errors::{PageError, PageResult};
pub use export::{render_html, save_html};
