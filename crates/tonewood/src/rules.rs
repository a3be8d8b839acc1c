//! Adjacency rules - context-sensitive style overrides.
//!
//! The base style of a token depends only on its class, but a handful of
//! constructs read wrong that way: the name right after a declaration
//! keyword should not light up in the function color, and a bare name
//! right after an operator is almost always a member access. These
//! overrides were originally written as specificity-ordered cascade
//! selectors; here they are an explicit table keyed by the tuple of
//! preceding classes, checked longest tuple first, so "more specific
//! wins" holds without a cascade engine or reliance on declaration order.

use std::collections::HashMap;
use std::fmt;

use tonewood_theme::Slot;

use crate::class::TokenClass;

/// The resolved visual treatment for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSpec {
    /// Use the palette style for this slot.
    Base(Slot),
    /// Render with the effective style of the preceding token.
    Inherit,
}

/// Errors from rule registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The exact same key tuple was registered twice. Rule keys must be
    /// mutually exclusive; there is no silent arbitration between two
    /// overrides for one context.
    Duplicate { key: String },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::Duplicate { key } => {
                write!(f, "duplicate adjacency rule for ({key})")
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// An ordered table of adjacency overrides.
///
/// Rules are keyed by one or two predecessor classes plus the current
/// class. Lookup checks the two-predecessor table before the
/// one-predecessor table, so a longer match always beats a shorter one.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pairs: HashMap<(TokenClass, TokenClass), StyleSpec>,
    triples: HashMap<(TokenClass, TokenClass, TokenClass), StyleSpec>,
}

impl RuleSet {
    /// An empty rule set: every token keeps its base style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard rule set.
    ///
    /// This is a closed set of four documented overrides, not a template
    /// to extend per language:
    ///
    /// 1. declaration keyword → function name: inherit
    /// 2. declaration keyword → type keyword: inherit
    /// 3. operator → bare name: platform member color
    /// 4. variable, operator → bare name: inherit (beats rule 3)
    pub fn standard() -> Self {
        let mut pairs = HashMap::new();
        pairs.insert(
            (TokenClass::DeclKeyword, TokenClass::Function),
            StyleSpec::Inherit,
        );
        pairs.insert(
            (TokenClass::DeclKeyword, TokenClass::TypeKeyword),
            StyleSpec::Inherit,
        );
        pairs.insert(
            (TokenClass::Operator, TokenClass::Plain),
            StyleSpec::Base(Slot::PlatformType),
        );

        let mut triples = HashMap::new();
        triples.insert(
            (TokenClass::Variable, TokenClass::Operator, TokenClass::Plain),
            StyleSpec::Inherit,
        );

        Self { pairs, triples }
    }

    /// Register an override for (predecessor, current).
    pub fn register_pair(
        &mut self,
        prev: TokenClass,
        current: TokenClass,
        spec: StyleSpec,
    ) -> Result<(), RuleError> {
        if self.pairs.contains_key(&(prev, current)) {
            return Err(RuleError::Duplicate {
                key: format!("{}, {}", prev.code(), current.code()),
            });
        }
        self.pairs.insert((prev, current), spec);
        Ok(())
    }

    /// Register an override for (predecessor2, predecessor1, current).
    pub fn register_triple(
        &mut self,
        prev2: TokenClass,
        prev1: TokenClass,
        current: TokenClass,
        spec: StyleSpec,
    ) -> Result<(), RuleError> {
        if self.triples.contains_key(&(prev2, prev1, current)) {
            return Err(RuleError::Duplicate {
                key: format!("{}, {}, {}", prev2.code(), prev1.code(), current.code()),
            });
        }
        self.triples.insert((prev2, prev1, current), spec);
        Ok(())
    }

    /// Find the override for a token given its predecessors, if any.
    /// The longer tuple is checked first.
    pub fn lookup(
        &self,
        prev2: Option<TokenClass>,
        prev1: Option<TokenClass>,
        current: TokenClass,
    ) -> Option<StyleSpec> {
        if let (Some(p2), Some(p1)) = (prev2, prev1) {
            if let Some(spec) = self.triples.get(&(p2, p1, current)) {
                return Some(*spec);
            }
        }
        if let Some(p1) = prev1 {
            if let Some(spec) = self.pairs.get(&(p1, current)) {
                return Some(*spec);
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.triples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len() + self.triples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rule_count() {
        assert_eq!(RuleSet::standard().len(), 4);
    }

    #[test]
    fn test_no_lookup_without_predecessor() {
        let rules = RuleSet::standard();
        assert_eq!(rules.lookup(None, None, TokenClass::Function), None);
    }

    #[test]
    fn test_pair_lookup() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.lookup(None, Some(TokenClass::DeclKeyword), TokenClass::Function),
            Some(StyleSpec::Inherit)
        );
        assert_eq!(
            rules.lookup(None, Some(TokenClass::Operator), TokenClass::Plain),
            Some(StyleSpec::Base(Slot::PlatformType))
        );
    }

    #[test]
    fn test_triple_beats_pair() {
        let rules = RuleSet::standard();
        // Same trailing pair as the member-access rule, but the variable
        // two back flips the answer.
        assert_eq!(
            rules.lookup(
                Some(TokenClass::Variable),
                Some(TokenClass::Operator),
                TokenClass::Plain
            ),
            Some(StyleSpec::Inherit)
        );
    }

    #[test]
    fn test_unrelated_prev2_falls_through_to_pair() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.lookup(
                Some(TokenClass::Punctuation),
                Some(TokenClass::Operator),
                TokenClass::Plain
            ),
            Some(StyleSpec::Base(Slot::PlatformType))
        );
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut rules = RuleSet::standard();
        let err = rules
            .register_pair(
                TokenClass::DeclKeyword,
                TokenClass::Function,
                StyleSpec::Base(Slot::Comment),
            )
            .unwrap_err();
        assert_eq!(
            err,
            RuleError::Duplicate {
                key: "kd, nf".into()
            }
        );
    }

    #[test]
    fn test_duplicate_triple_rejected() {
        let mut rules = RuleSet::standard();
        assert!(
            rules
                .register_triple(
                    TokenClass::Variable,
                    TokenClass::Operator,
                    TokenClass::Plain,
                    StyleSpec::Inherit,
                )
                .is_err()
        );
    }

    #[test]
    fn test_pair_and_triple_keys_are_independent() {
        let mut rules = RuleSet::new();
        rules
            .register_pair(TokenClass::Operator, TokenClass::Plain, StyleSpec::Inherit)
            .unwrap();
        // A triple ending in the same pair is a different key.
        rules
            .register_triple(
                TokenClass::Variable,
                TokenClass::Operator,
                TokenClass::Plain,
                StyleSpec::Base(Slot::Keyword),
            )
            .unwrap();
        assert_eq!(rules.len(), 2);
    }
}
