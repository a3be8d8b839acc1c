//! Token class definitions - single source of truth.
//!
//! This module maps the broad vocabulary of class codes emitted by
//! external lexers onto a small, closed set of token classes. Lexers
//! disagree on how finely they slice tokens (five numeric subtypes, a
//! dozen string subtypes), but styling only needs the coarse class, so
//! many codes collapse onto one [`TokenClass`] and each class resolves to
//! exactly one palette [`Slot`].
//!
//! Codes the mapping has never seen degrade to [`TokenClass::Plain`]:
//! visual correctness for unanticipated lexers is best-effort, not
//! something to fail over.

use tonewood_theme::Slot;

/// The syntactic category of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Comment,
    /// Documentation comments (`///`, `/** */`).
    DocComment,
    /// Preprocessor and compiler-directive comments (`#if`, `@available`).
    PreprocComment,
    /// Text the lexer could not classify at all.
    Error,
    Keyword,
    /// Declaration keywords (`func`, `var`, `class`, `struct`).
    DeclKeyword,
    /// Constant keywords (`true`, `false`, `nil`).
    ConstKeyword,
    /// Built-in type keywords (`Int`, `String`, `Self`).
    TypeKeyword,
    Operator,
    /// Word-shaped operators (`is`, `as`, `in`).
    OperatorWord,
    Number,
    Str,
    /// Function names at declaration or call sites.
    Function,
    /// Variable names, including `self` and `super`.
    Variable,
    Punctuation,
    Whitespace,
    /// Bare names and anything unclassified.
    Plain,
}

impl TokenClass {
    /// Map a lexer's class code to its token class.
    ///
    /// Accepts both the compact codes lexers emit (`kd`, `nf`, `mi`) and
    /// spelled-out names (`keyword.declaration`). Unknown codes fall back
    /// by leading letter, then to [`TokenClass::Plain`].
    pub fn from_code(code: &str) -> TokenClass {
        match code {
            // Comments
            "c" | "c1" | "cm" | "comment" => TokenClass::Comment,
            "cs" | "cd" | "comment.doc" => TokenClass::DocComment,
            "cp" | "cpf" | "comment.preproc" => TokenClass::PreprocComment,

            // Lexer errors
            "err" | "error" => TokenClass::Error,

            // Keywords - generic and the specific kinds the rules care about
            "k" | "kr" | "kn" | "kp" | "keyword" => TokenClass::Keyword,
            "kd" | "keyword.declaration" => TokenClass::DeclKeyword,
            "kc" | "keyword.constant" => TokenClass::ConstKeyword,
            "kt" | "keyword.type" => TokenClass::TypeKeyword,

            // Operators
            "o" | "operator" => TokenClass::Operator,
            "ow" | "operator.word" => TokenClass::OperatorWord,

            // Numeric literals - all subtypes collapse
            "m" | "mb" | "mf" | "mh" | "mi" | "mo" | "il" | "number" => TokenClass::Number,

            // String literals and their many subtypes
            "s" | "s1" | "s2" | "sb" | "sc" | "sd" | "se" | "sh" | "si" | "sr" | "ss" | "sx"
            | "string" => TokenClass::Str,

            // Names
            "nf" | "name.function" => TokenClass::Function,
            "nv" | "vc" | "vg" | "vi" | "name.variable" => TokenClass::Variable,
            "n" | "nx" | "name" | "text" => TokenClass::Plain,

            "p" | "punctuation" => TokenClass::Punctuation,
            "w" | "whitespace" => TokenClass::Whitespace,

            // Fallback: first by spelled-out prefix, then by code letter
            other => {
                if other.starts_with("comment") {
                    TokenClass::Comment
                } else if other.starts_with("keyword") {
                    TokenClass::Keyword
                } else if other.starts_with("string") {
                    TokenClass::Str
                } else if other.starts_with("number") {
                    TokenClass::Number
                } else {
                    match other.bytes().next() {
                        Some(b'c') => TokenClass::Comment,
                        Some(b'k') => TokenClass::Keyword,
                        Some(b's') => TokenClass::Str,
                        Some(b'm') => TokenClass::Number,
                        Some(b'o') => TokenClass::Operator,
                        Some(b'w') => TokenClass::Whitespace,
                        _ => TokenClass::Plain,
                    }
                }
            }
        }
    }

    /// The canonical code for this class, used in diagnostics.
    pub fn code(self) -> &'static str {
        match self {
            TokenClass::Comment => "c",
            TokenClass::DocComment => "cs",
            TokenClass::PreprocComment => "cp",
            TokenClass::Error => "err",
            TokenClass::Keyword => "k",
            TokenClass::DeclKeyword => "kd",
            TokenClass::ConstKeyword => "kc",
            TokenClass::TypeKeyword => "kt",
            TokenClass::Operator => "o",
            TokenClass::OperatorWord => "ow",
            TokenClass::Number => "m",
            TokenClass::Str => "s",
            TokenClass::Function => "nf",
            TokenClass::Variable => "nv",
            TokenClass::Punctuation => "p",
            TokenClass::Whitespace => "w",
            TokenClass::Plain => "n",
        }
    }

    /// The palette slot this class resolves to when no adjacency rule
    /// overrides it. Total: every class has exactly one slot.
    pub fn slot(self) -> Slot {
        match self {
            TokenClass::Comment | TokenClass::DocComment => Slot::Comment,
            TokenClass::PreprocComment => Slot::Preproc,
            // The palette defines no tier for lexer errors; they read as
            // plain text.
            TokenClass::Error => Slot::Plain,
            // `self`/`super` arrive classified as variables and take the
            // keyword color, as do word operators and constant keywords.
            TokenClass::Keyword
            | TokenClass::DeclKeyword
            | TokenClass::ConstKeyword
            | TokenClass::OperatorWord
            | TokenClass::Variable => Slot::Keyword,
            TokenClass::TypeKeyword => Slot::PlatformType,
            TokenClass::Operator => Slot::Operator,
            TokenClass::Number => Slot::Number,
            TokenClass::Str => Slot::String,
            TokenClass::Function => Slot::ProjectType,
            TokenClass::Punctuation | TokenClass::Whitespace | TokenClass::Plain => Slot::Plain,
        }
    }
}

/// A classified, contiguous unit of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub class: TokenClass,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(class: TokenClass, text: &'a str) -> Self {
        Self { class, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_subtypes_collapse() {
        for code in ["m", "mb", "mf", "mh", "mi", "mo"] {
            assert_eq!(TokenClass::from_code(code), TokenClass::Number);
        }
    }

    #[test]
    fn test_string_subtypes_collapse() {
        for code in ["s", "s1", "s2", "se", "si"] {
            assert_eq!(TokenClass::from_code(code), TokenClass::Str);
        }
    }

    #[test]
    fn test_keyword_kinds_stay_distinct() {
        assert_eq!(TokenClass::from_code("k"), TokenClass::Keyword);
        assert_eq!(TokenClass::from_code("kd"), TokenClass::DeclKeyword);
        assert_eq!(TokenClass::from_code("kc"), TokenClass::ConstKeyword);
        assert_eq!(TokenClass::from_code("kt"), TokenClass::TypeKeyword);
    }

    #[test]
    fn test_spelled_out_names() {
        assert_eq!(
            TokenClass::from_code("keyword.declaration"),
            TokenClass::DeclKeyword
        );
        assert_eq!(TokenClass::from_code("name.function"), TokenClass::Function);
        assert_eq!(TokenClass::from_code("comment.doc"), TokenClass::DocComment);
    }

    #[test]
    fn test_unknown_code_degrades_to_plain() {
        assert_eq!(TokenClass::from_code("zz"), TokenClass::Plain);
        assert_eq!(TokenClass::from_code(""), TokenClass::Plain);
        assert_eq!(TokenClass::from_code("gp"), TokenClass::Plain);
    }

    #[test]
    fn test_unknown_code_letter_fallback() {
        assert_eq!(TokenClass::from_code("c99"), TokenClass::Comment);
        assert_eq!(TokenClass::from_code("sq"), TokenClass::Str);
        assert_eq!(TokenClass::from_code("keyword.pseudo"), TokenClass::Keyword);
    }

    #[test]
    fn test_every_class_resolves_to_a_slot() {
        // Completeness: slot() is a total match, so this is really
        // checking that the canonical codes round-trip through it.
        let classes = [
            TokenClass::Comment,
            TokenClass::DocComment,
            TokenClass::PreprocComment,
            TokenClass::Error,
            TokenClass::Keyword,
            TokenClass::DeclKeyword,
            TokenClass::ConstKeyword,
            TokenClass::TypeKeyword,
            TokenClass::Operator,
            TokenClass::OperatorWord,
            TokenClass::Number,
            TokenClass::Str,
            TokenClass::Function,
            TokenClass::Variable,
            TokenClass::Punctuation,
            TokenClass::Whitespace,
            TokenClass::Plain,
        ];
        for class in classes {
            let _ = class.slot();
            assert_eq!(TokenClass::from_code(class.code()), class);
        }
    }
}
