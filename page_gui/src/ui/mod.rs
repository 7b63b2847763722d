//! UI module for the page viewer
//!
//! The page is one scrollable column of three regions:
//!
//! # Region Structure
//! - `header` - Branding banner: logos and title left, mascot right
//! - `sections` - Intro paragraph plus the five topic section cards
//! - `footer` - Copyright line and attribution
//!
//! # Components
//! - `simulation_card` - Bordered placeholder card for future simulations
//!
//! # Shared Components
//! - `shared/palette` - Brand colors and container styles
//! - `shared/rich` - Inline-run rendering (prose with formula chips)

// Page regions
pub mod footer;
pub mod header;
pub mod sections;

// Components
pub mod simulation_card;

// Shared components
pub mod shared;
