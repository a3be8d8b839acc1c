//! Rendering resolved tokens to HTML and ANSI.
//!
//! Both renderers share one preliminary pass: turning style specs into
//! effective palette slots (chasing `Inherit` back through predecessors).
//! Adjacent tokens that land on the same slot are coalesced into a single
//! element or escape run.

use std::io::{self, Write};

use tonewood_theme::{Palette, Slot, Style};

use crate::class::{Token, TokenClass};
use crate::rules::StyleSpec;

/// HTML output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlFormat {
    /// Custom elements with the default prefix: `<tw-k>`, `<tw-s>`, etc. (default)
    CustomElements,
    /// Custom elements with a caller-chosen prefix, e.g. `<code-k>`.
    CustomElementsWithPrefix(String),
    /// Traditional class-based spans: `<span class="keyword">`, etc.
    ClassNames,
    /// Class-based spans with a prefix: `<span class="hl-keyword">`, etc.
    ClassNamesWithPrefix(String),
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::CustomElements
    }
}

fn make_html_tags(slot: Slot, format: &HtmlFormat) -> Option<(String, String)> {
    let tag = slot.tag()?;
    Some(match format {
        HtmlFormat::CustomElements => (format!("<tw-{tag}>"), format!("</tw-{tag}>")),
        HtmlFormat::CustomElementsWithPrefix(prefix) => {
            (format!("<{prefix}-{tag}>"), format!("</{prefix}-{tag}>"))
        }
        HtmlFormat::ClassNames => (
            format!("<span class=\"{}\">", slot.name()),
            "</span>".to_string(),
        ),
        HtmlFormat::ClassNamesWithPrefix(prefix) => (
            format!("<span class=\"{}-{}\">", prefix, slot.name()),
            "</span>".to_string(),
        ),
    })
}

/// Turn style specs into concrete palette slots, one per token.
///
/// `Inherit` takes the effective slot of the nearest preceding
/// non-whitespace token (whitespace is as transparent here as it is to
/// the resolver's adjacency tracking). An `Inherit` with no predecessor
/// renders plain.
pub fn effective_slots(tokens: &[Token<'_>], specs: &[StyleSpec]) -> Vec<Slot> {
    debug_assert_eq!(tokens.len(), specs.len());

    let mut slots = Vec::with_capacity(specs.len());
    let mut last: Option<Slot> = None;

    for (token, spec) in tokens.iter().zip(specs) {
        let slot = match spec {
            StyleSpec::Base(slot) => *slot,
            StyleSpec::Inherit => last.unwrap_or(Slot::Plain),
        };
        slots.push(slot);
        if token.class != TokenClass::Whitespace {
            last = Some(slot);
        }
    }

    slots
}

/// A run of consecutive tokens sharing one effective slot.
struct Run {
    slot: Slot,
    text: String,
}

fn coalesce(
    tokens: &[Token<'_>],
    slots: &[Slot],
    escape: impl Fn(&str) -> String,
) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (token, &slot) in tokens.iter().zip(slots) {
        if let Some(last) = runs.last_mut() {
            if last.slot == slot {
                last.text.push_str(&escape(token.text));
                continue;
            }
        }
        runs.push(Run {
            slot,
            text: escape(token.text),
        });
    }
    runs
}

/// Render a resolved block as HTML.
///
/// Token text is escaped; tokens whose effective slot carries no tag
/// (plain text) are emitted bare.
pub fn tokens_to_html(tokens: &[Token<'_>], specs: &[StyleSpec], format: &HtmlFormat) -> String {
    let slots = effective_slots(tokens, specs);
    let runs = coalesce(tokens, &slots, html_escape);

    let mut html = String::new();
    for run in runs {
        match make_html_tags(run.slot, format) {
            Some((open, close)) => {
                html.push_str(&open);
                html.push_str(&run.text);
                html.push_str(&close);
            }
            None => html.push_str(&run.text),
        }
    }
    html
}

/// Write a resolved block as HTML to a writer.
pub fn write_tokens_as_html<W: Write>(
    w: &mut W,
    tokens: &[Token<'_>],
    specs: &[StyleSpec],
    format: &HtmlFormat,
) -> io::Result<()> {
    let html = tokens_to_html(tokens, specs, format);
    w.write_all(html.as_bytes())
}

/// Render a resolved block as ANSI-colored text using a palette.
///
/// Tokens on the plain slot (and slots whose palette style is empty) are
/// emitted without escapes; everything else gets the style's SGR prefix
/// and a single reset per run.
pub fn tokens_to_ansi(tokens: &[Token<'_>], specs: &[StyleSpec], palette: &Palette) -> String {
    let slots = effective_slots(tokens, specs);
    let runs = coalesce(tokens, &slots, |text: &str| text.to_string());

    let mut out = String::new();
    for run in runs {
        if run.slot == Slot::Plain {
            out.push_str(&run.text);
            continue;
        }
        let style = palette.style(run.slot);
        if style.is_plain() {
            out.push_str(&run.text);
        } else {
            out.push_str(&style.ansi());
            out.push_str(&run.text);
            out.push_str(Style::ANSI_RESET);
        }
    }
    out
}

/// Write a resolved block as ANSI-colored text to a writer.
pub fn write_tokens_as_ansi<W: Write>(
    w: &mut W,
    tokens: &[Token<'_>],
    specs: &[StyleSpec],
    palette: &Palette,
) -> io::Result<()> {
    let ansi = tokens_to_ansi(tokens, specs, palette);
    w.write_all(ansi.as_bytes())
}

/// Escape HTML special characters.
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
