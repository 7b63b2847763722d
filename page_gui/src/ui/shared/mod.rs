//! Shared UI components reusable across page regions
//!
//! Contains:
//! - `palette` - Brand colors, theme, and container styles
//! - `rich` - Inline-run rendering (prose, emphasis, formula chips)

pub mod palette;
pub mod rich;
