//! Tonewood - token style resolution for classified source tokens.
//!
//! An external lexer splits source text into classified tokens; tonewood
//! decides what each token should look like. Most of that is a lookup
//! (comments get the comment color), but a handful of adjacency rules
//! override the lookup based on the immediately preceding tokens: the
//! name after a declaration keyword stays neutral instead of taking the
//! function color, and a bare name after an operator takes the member
//! color. Resolution is one deterministic pass with two tokens of
//! lookback; palettes and rules are fixed configuration.
//!
//! # Quick start
//!
//! ```
//! use tonewood::{Highlighter, Token, TokenClass};
//!
//! let highlighter = Highlighter::new();
//! let tokens = [
//!     Token::new(TokenClass::DeclKeyword, "var"),
//!     Token::new(TokenClass::Whitespace, " "),
//!     Token::new(TokenClass::Plain, "x"),
//! ];
//! assert_eq!(highlighter.highlight_tokens(&tokens), "<tw-k>var</tw-k> x");
//! ```
//!
//! Terminal output works the same way through [`AnsiHighlighter`] with a
//! palette from [`tonewood_theme`]:
//!
//! ```
//! use tonewood::AnsiHighlighter;
//! use tonewood_theme::builtin;
//!
//! let highlighter = AnsiHighlighter::new(builtin::dusk());
//! let ansi = highlighter.highlight_dump("c1\t// hello\n").unwrap();
//! assert!(ansi.starts_with("\x1b["));
//! ```
//!
//! # Pipeline
//!
//! 1. [`stream::parse_dump`] - read a lexer's token dump (optional; you
//!    can also build [`Token`]s directly)
//! 2. [`Resolver::resolve`] - one pass from token classes to style specs,
//!    applying adjacency overrides
//! 3. [`render::tokens_to_html`] / [`render::tokens_to_ansi`] - paint the
//!    tokens in their resolved styles
//!
//! The stylesheet a web page needs to go with the HTML output comes from
//! `tonewood_theme::palette_to_css`.

pub mod class;
pub mod error;
pub mod highlighter;
pub mod render;
pub mod resolver;
pub mod rules;
pub mod stream;

pub use class::{Token, TokenClass};
pub use error::Error;
pub use highlighter::{AnsiHighlighter, Highlighter};
pub use render::{
    HtmlFormat, effective_slots, html_escape, tokens_to_ansi, tokens_to_html,
    write_tokens_as_ansi, write_tokens_as_html,
};
pub use resolver::Resolver;
pub use rules::{RuleError, RuleSet, StyleSpec};
pub use stream::{OwnedToken, StreamError, parse_dump};

// Palette types appear throughout the public API; re-export the crate so
// callers don't have to depend on it separately.
pub use tonewood_theme as theme;
