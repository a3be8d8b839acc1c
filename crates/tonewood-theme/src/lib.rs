//! Palette support for tonewood token styling.
//!
//! This crate provides:
//! - Slot definitions (the canonical list of semantic color roles)
//! - Color, emphasis and style primitives with ANSI output
//! - CSS stylesheet generation for web renderers
//! - Built-in palettes (dusk, daylight)
//! - Palette parsing from flat TOML files (behind the `toml` feature)

pub mod css;
pub mod palette;
pub mod style;

pub use css::{CssFormat, palette_to_css};
pub use palette::{Palette, PaletteError, Slot, builtin};
pub use style::{Color, Modifiers, Style};
