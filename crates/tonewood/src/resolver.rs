//! The resolver - one pass from classified tokens to style specs.

use crate::class::{Token, TokenClass};
use crate::rules::{RuleSet, StyleSpec};

/// Resolves a sequence of classified tokens to a parallel sequence of
/// style specs.
///
/// A resolver is read-only configuration: it holds a [`RuleSet`] fixed at
/// construction and keeps no state between invocations. Resolving is a
/// deterministic, total function over its input, so resolving many blocks
/// in parallel from a shared resolver is fine.
#[derive(Debug, Clone)]
pub struct Resolver {
    rules: RuleSet,
}

impl Default for Resolver {
    /// Same as [`Resolver::new`]: the standard rule set.
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// A resolver carrying the standard rule set.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::standard(),
        }
    }

    /// A resolver with a caller-supplied rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolve one block of tokens.
    ///
    /// Each token gets the palette slot of its class unless an adjacency
    /// rule matches its predecessors; at most one rule applies, longest
    /// match first. The first token never matches a rule (there is
    /// nothing to be adjacent to). Whitespace is transparent: it resolves
    /// to its base style and does not become the tracked predecessor, the
    /// same way bare whitespace between elements never interrupted the
    /// original cascade's sibling adjacency.
    ///
    /// Output length always equals input length.
    pub fn resolve(&self, tokens: &[Token<'_>]) -> Vec<StyleSpec> {
        let mut specs = Vec::with_capacity(tokens.len());
        let mut prev1: Option<TokenClass> = None;
        let mut prev2: Option<TokenClass> = None;

        for token in tokens {
            let class = token.class;
            if class == TokenClass::Whitespace {
                specs.push(StyleSpec::Base(class.slot()));
                continue;
            }

            let spec = self
                .rules
                .lookup(prev2, prev1, class)
                .unwrap_or(StyleSpec::Base(class.slot()));
            specs.push(spec);

            prev2 = prev1;
            prev1 = Some(class);
        }

        specs
    }
}
