//! CSS stylesheet generation.
//!
//! A palette is the only tunable surface of the styling pipeline, and for
//! web renderers it is delivered as a stylesheet: one container rule
//! carrying the block background and plain-text color, then one rule per
//! styled slot. The selectors must match whichever HTML output format the
//! renderer was configured with, so the same format choices exist here.

use std::fmt::Write;

use crate::palette::{Palette, Slot};
use crate::style::Style;

/// Selector format for generated CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssFormat {
    /// Custom elements with the default prefix: `tw-k`, `tw-s`, etc.
    CustomElements,
    /// Custom elements with a caller-chosen prefix: `code-k`, `code-s`, etc.
    CustomElementsWithPrefix(String),
    /// Class selectors using role names: `.keyword`, `.string`, etc.
    ClassNames,
    /// Class selectors with a prefix: `.hl-keyword`, `.hl-string`, etc.
    ClassNamesWithPrefix(String),
}

impl Default for CssFormat {
    fn default() -> Self {
        Self::CustomElements
    }
}

impl CssFormat {
    fn selector(&self, slot: Slot) -> Option<String> {
        match self {
            CssFormat::CustomElements => slot.tag().map(|t| format!("tw-{t}")),
            CssFormat::CustomElementsWithPrefix(prefix) => {
                slot.tag().map(|t| format!("{prefix}-{t}"))
            }
            CssFormat::ClassNames => slot.tag().map(|_| format!(".{}", slot.name())),
            CssFormat::ClassNamesWithPrefix(prefix) => {
                slot.tag().map(|_| format!(".{}-{}", prefix, slot.name()))
            }
        }
    }
}

fn write_declarations(css: &mut String, style: &Style) {
    if let Some(color) = style.fg {
        let _ = write!(css, " color: {color};");
    }
    if style.modifiers.bold {
        css.push_str(" font-weight: bold;");
    }
    if style.modifiers.italic {
        css.push_str(" font-style: italic;");
    }
}

/// Generate the stylesheet for a palette.
///
/// The container rule targets `.tw-code`; hosts wrap highlighted output in
/// an element with that class. Slots whose style is plain produce no rule
/// (they render with the container's color).
pub fn palette_to_css(palette: &Palette, format: &CssFormat) -> String {
    let mut css = String::new();
    css.push_str(".tw-code {");
    let _ = write!(css, " background-color: {};", palette.background);
    write_declarations(&mut css, &palette.plain);
    css.push_str(" }\n");

    for slot in Slot::ALL {
        let Some(selector) = format.selector(slot) else {
            continue;
        };
        let style = palette.style(slot);
        if style.is_plain() {
            continue;
        }
        let _ = write!(css, "{selector} {{");
        write_declarations(&mut css, style);
        css.push_str(" }\n");
    }

    css
}
