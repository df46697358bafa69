use crate::builder::build_grammar;
use crate::error::GrammarError;
use crate::rule::{LexerRule, ParserRule, RuleRef};
use std::collections::HashMap;
use std::str::FromStr;

/// An immutable rule set: lexer rules, parser rules and their name tables.
///
/// Every [`RuleRef`] inside every alternative is a valid index into
/// `lexer_rules` or `parser_rules`, and no two rules of either kind share a
/// name. Lexer rules keep the order in which they appeared in the grammar
/// text (after overlay substitution); the lexer depends on that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    lexer_rules: Vec<LexerRule>,
    parser_rules: Vec<ParserRule>,
    lexer_indices: HashMap<String, usize>,
    parser_indices: HashMap<String, usize>,
}

impl Grammar {
    pub(crate) fn from_parts(
        lexer_rules: Vec<LexerRule>,
        parser_rules: Vec<ParserRule>,
        lexer_indices: HashMap<String, usize>,
        parser_indices: HashMap<String, usize>,
    ) -> Self {
        Self {
            lexer_rules,
            parser_rules,
            lexer_indices,
            parser_indices,
        }
    }

    /// Builds a grammar from grammar text without an overlay.
    pub fn parse(source: &str) -> Result<Self, GrammarError> {
        build_grammar(source, "")
    }

    /// Builds a grammar whose rules named in `overlay` are replaced in place.
    pub fn with_overlay(source: &str, overlay: &str) -> Result<Self, GrammarError> {
        build_grammar(source, overlay)
    }

    /// Returns the lexer rules in build order.
    pub fn lexer_rules(&self) -> &[LexerRule] {
        &self.lexer_rules
    }

    /// Returns the parser rules in build order.
    pub fn parser_rules(&self) -> &[ParserRule] {
        &self.parser_rules
    }

    pub fn lexer_rule(&self, index: usize) -> Option<&LexerRule> {
        self.lexer_rules.get(index)
    }

    pub fn parser_rule(&self, index: usize) -> Option<&ParserRule> {
        self.parser_rules.get(index)
    }

    pub fn lexer_index(&self, name: &str) -> Option<usize> {
        self.lexer_indices.get(name).copied()
    }

    pub fn parser_index(&self, name: &str) -> Option<usize> {
        self.parser_indices.get(name).copied()
    }

    /// Looks a rule up by name in both tables.
    pub fn resolve(&self, name: &str) -> Option<RuleRef> {
        self.lexer_index(name)
            .map(RuleRef::Lexer)
            .or_else(|| self.parser_index(name).map(RuleRef::Parser))
    }

    /// Returns the name of the rule a reference points at.
    pub fn rule_name(&self, rule: RuleRef) -> Option<&str> {
        match rule {
            RuleRef::Lexer(index) => self.lexer_rule(index).map(LexerRule::name),
            RuleRef::Parser(index) => self.parser_rule(index).map(ParserRule::name),
        }
    }

    /// Total number of rules of both kinds.
    pub fn len(&self) -> usize {
        self.lexer_rules.len() + self.parser_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for Grammar {
    type Err = GrammarError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Grammar::parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_table_of_defining_kind() {
        let grammar = Grammar::parse("a: \"1\"\ns: a a").unwrap();
        assert_eq!(grammar.resolve("a"), Some(RuleRef::Lexer(0)));
        assert_eq!(grammar.resolve("s"), Some(RuleRef::Parser(0)));
        assert_eq!(grammar.resolve("t"), None);
    }

    #[test]
    fn test_rule_name_round_trips_through_refs() {
        let grammar = Grammar::parse("a: \"1\"\nb: \"2\"\ns: b a").unwrap();
        let alternative = &grammar.parser_rules()[0].alternatives()[0];
        let names: Vec<_> = alternative
            .iter()
            .map(|rule| grammar.rule_name(*rule).unwrap())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_from_str() {
        let grammar: Grammar = "a: \"1\"".parse().unwrap();
        assert_eq!(grammar.len(), 1);
        assert!(!grammar.is_empty());
    }

    #[test]
    fn test_empty_source_builds_empty_grammar() {
        let grammar = Grammar::parse("").unwrap();
        assert!(grammar.is_empty());
    }
}
