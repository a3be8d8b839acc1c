//! Token dump parsing - the input boundary.
//!
//! External lexers hand us their classification one token per line:
//! the class code, a tab, then the token text with `\n`, `\t` and `\\`
//! escaped. Unknown class codes degrade to plain text like everywhere
//! else; a structurally bad line is an error carrying its line number.

use std::fmt;

use crate::class::{Token, TokenClass};

/// A parsed token owning its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedToken {
    pub class: TokenClass,
    pub text: String,
}

impl OwnedToken {
    pub fn as_token(&self) -> Token<'_> {
        Token::new(self.class, &self.text)
    }
}

/// Borrow a parsed dump as a token slice for the resolver.
pub fn as_tokens(owned: &[OwnedToken]) -> Vec<Token<'_>> {
    owned.iter().map(OwnedToken::as_token).collect()
}

/// Errors from parsing a token dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A non-empty line had no tab between class code and text.
    MissingTab { line: usize },
    /// The text field contained a `\` followed by something other than
    /// `n`, `t` or `\`.
    BadEscape { line: usize },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::MissingTab { line } => {
                write!(f, "token dump line {line}: expected `code<TAB>text`")
            }
            StreamError::BadEscape { line } => {
                write!(f, "token dump line {line}: invalid escape in token text")
            }
        }
    }
}

impl std::error::Error for StreamError {}

fn unescape(text: &str, line: usize) -> Result<String, StreamError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            _ => return Err(StreamError::BadEscape { line }),
        }
    }
    Ok(out)
}

/// Parse a token dump. Empty lines are skipped.
pub fn parse_dump(input: &str) -> Result<Vec<OwnedToken>, StreamError> {
    let mut tokens = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        if raw.is_empty() {
            continue;
        }
        let Some((code, text)) = raw.split_once('\t') else {
            return Err(StreamError::MissingTab { line });
        };
        tokens.push(OwnedToken {
            class: TokenClass::from_code(code),
            text: unescape(text, line)?,
        });
    }
    Ok(tokens)
}
