//! High-level highlighting API.
//!
//! This module provides the two entry points most callers want:
//!
//! - [`Highlighter`]: HTML output (custom elements or class-based spans)
//! - [`AnsiHighlighter`]: Terminal output with ANSI colors
//!
//! Both own a [`Resolver`] and are read-only after construction, so a
//! single instance can highlight any number of blocks, from any number
//! of threads, with no shared mutable state.

use std::io::Write;

use tonewood_theme::Palette;

use crate::class::Token;
use crate::error::Error;
use crate::render::{HtmlFormat, tokens_to_ansi, tokens_to_html};
use crate::resolver::Resolver;
use crate::rules::RuleSet;
use crate::stream;

/// High-level highlighter for HTML output.
///
/// # Example
///
/// ```
/// use tonewood::{Highlighter, Token, TokenClass};
///
/// let highlighter = Highlighter::new();
/// let tokens = [
///     Token::new(TokenClass::DeclKeyword, "func"),
///     Token::new(TokenClass::Whitespace, " "),
///     Token::new(TokenClass::Function, "main"),
/// ];
/// let html = highlighter.highlight_tokens(&tokens);
/// assert_eq!(html, "<tw-k>func</tw-k> <tw-k>main</tw-k>");
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
    resolver: Resolver,
    format: HtmlFormat,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with the standard rules and custom-element
    /// output (`<tw-k>`, `<tw-s>`, etc.).
    pub fn new() -> Self {
        Self {
            resolver: Resolver::new(),
            format: HtmlFormat::default(),
        }
    }

    /// Create a highlighter with a specific HTML output format.
    pub fn with_format(format: HtmlFormat) -> Self {
        Self {
            resolver: Resolver::new(),
            format,
        }
    }

    /// Create a highlighter with a caller-supplied rule set.
    pub fn with_rules(rules: RuleSet, format: HtmlFormat) -> Self {
        Self {
            resolver: Resolver::with_rules(rules),
            format,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Highlight a block of classified tokens and return HTML.
    pub fn highlight_tokens(&self, tokens: &[Token<'_>]) -> String {
        let specs = self.resolver.resolve(tokens);
        tokens_to_html(tokens, &specs, &self.format)
    }

    /// Parse a token dump and return HTML.
    pub fn highlight_dump(&self, dump: &str) -> Result<String, Error> {
        let owned = stream::parse_dump(dump)?;
        let tokens = stream::as_tokens(&owned);
        Ok(self.highlight_tokens(&tokens))
    }

    /// Parse a token dump and write HTML to a writer.
    pub fn highlight_dump_to_writer<W: Write>(&self, w: &mut W, dump: &str) -> Result<(), Error> {
        let html = self.highlight_dump(dump)?;
        w.write_all(html.as_bytes())?;
        Ok(())
    }
}

/// High-level highlighter for ANSI terminal output.
///
/// Owns a [`Palette`] which determines the colors for each slot.
#[derive(Debug, Clone)]
pub struct AnsiHighlighter {
    resolver: Resolver,
    palette: Palette,
}

impl AnsiHighlighter {
    /// Create an ANSI highlighter with the given palette.
    pub fn new(palette: Palette) -> Self {
        Self {
            resolver: Resolver::new(),
            palette,
        }
    }

    /// Create an ANSI highlighter with a caller-supplied rule set.
    pub fn with_rules(rules: RuleSet, palette: Palette) -> Self {
        Self {
            resolver: Resolver::with_rules(rules),
            palette,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Highlight a block of classified tokens and return ANSI text.
    pub fn highlight_tokens(&self, tokens: &[Token<'_>]) -> String {
        let specs = self.resolver.resolve(tokens);
        tokens_to_ansi(tokens, &specs, &self.palette)
    }

    /// Parse a token dump and return ANSI text.
    pub fn highlight_dump(&self, dump: &str) -> Result<String, Error> {
        let owned = stream::parse_dump(dump)?;
        let tokens = stream::as_tokens(&owned);
        Ok(self.highlight_tokens(&tokens))
    }

    /// Parse a token dump and write ANSI text to a writer.
    pub fn highlight_dump_to_writer<W: Write>(&self, w: &mut W, dump: &str) -> Result<(), Error> {
        let ansi = self.highlight_dump(dump)?;
        w.write_all(ansi.as_bytes())?;
        Ok(())
    }
}
