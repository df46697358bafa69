use crate::traits::Spanned;
use grammar_framework::{LexerRule, ParserRule};
use std::fmt;

/// A single matched token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerRuleContext<'g> {
    start_index: usize,
    rule_index: usize,
    rule: &'g LexerRule,
}

impl<'g> LexerRuleContext<'g> {
    pub fn new(start_index: usize, rule_index: usize, rule: &'g LexerRule) -> Self {
        Self {
            start_index,
            rule_index,
            rule,
        }
    }

    pub fn rule(&self) -> &'g LexerRule {
        self.rule
    }

    /// Index of the rule in the grammar's lexer-rule array.
    pub fn rule_index(&self) -> usize {
        self.rule_index
    }

    pub fn name(&self) -> &'g str {
        self.rule.name()
    }
}

impl Spanned for LexerRuleContext<'_> {
    fn start_index(&self) -> usize {
        self.start_index
    }

    fn stop_index(&self) -> usize {
        self.start_index + 1
    }
}

/// A parser rule matched through one of its alternatives.
///
/// The children are the contexts of that alternative's elements, in order.
/// Their spans are adjacent, and together they cover exactly this node's
/// span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserRuleContext<'g> {
    start_index: usize,
    stop_index: usize,
    rule_index: usize,
    rule: &'g ParserRule,
    children: Vec<RuleContext<'g>>,
}

impl<'g> ParserRuleContext<'g> {
    /// Creates a node spanning from `start_index` to the stop of the last
    /// child.
    pub fn new(
        start_index: usize,
        rule_index: usize,
        rule: &'g ParserRule,
        children: Vec<RuleContext<'g>>,
    ) -> Self {
        let stop_index = children
            .last()
            .map_or(start_index, |child| child.stop_index());
        Self {
            start_index,
            stop_index,
            rule_index,
            rule,
            children,
        }
    }

    pub fn rule(&self) -> &'g ParserRule {
        self.rule
    }

    /// Index of the rule in the grammar's parser-rule array.
    pub fn rule_index(&self) -> usize {
        self.rule_index
    }

    pub fn name(&self) -> &'g str {
        self.rule.name()
    }

    pub fn children(&self) -> &[RuleContext<'g>] {
        &self.children
    }

    /// Returns the matched tokens in input order.
    pub fn leaves(&self) -> Vec<&LexerRuleContext<'g>> {
        let mut leaves = Vec::with_capacity(self.token_count());
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a LexerRuleContext<'g>>) {
        for child in &self.children {
            match child {
                RuleContext::Lexer(token) => leaves.push(token),
                RuleContext::Parser(node) => node.collect_leaves(leaves),
            }
        }
    }
}

impl Spanned for ParserRuleContext<'_> {
    fn start_index(&self) -> usize {
        self.start_index
    }

    fn stop_index(&self) -> usize {
        self.stop_index
    }
}

/// A parse-tree node of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleContext<'g> {
    Lexer(LexerRuleContext<'g>),
    Parser(ParserRuleContext<'g>),
}

impl<'g> RuleContext<'g> {
    pub fn name(&self) -> &'g str {
        match self {
            RuleContext::Lexer(context) => context.name(),
            RuleContext::Parser(context) => context.name(),
        }
    }

    pub fn as_parser(&self) -> Option<&ParserRuleContext<'g>> {
        match self {
            RuleContext::Parser(context) => Some(context),
            RuleContext::Lexer(_) => None,
        }
    }

    pub fn as_lexer(&self) -> Option<&LexerRuleContext<'g>> {
        match self {
            RuleContext::Lexer(context) => Some(context),
            RuleContext::Parser(_) => None,
        }
    }
}

impl Spanned for RuleContext<'_> {
    fn start_index(&self) -> usize {
        match self {
            RuleContext::Lexer(context) => context.start_index(),
            RuleContext::Parser(context) => context.start_index(),
        }
    }

    fn stop_index(&self) -> usize {
        match self {
            RuleContext::Lexer(context) => context.stop_index(),
            RuleContext::Parser(context) => context.stop_index(),
        }
    }
}

impl<'g> From<LexerRuleContext<'g>> for RuleContext<'g> {
    fn from(context: LexerRuleContext<'g>) -> Self {
        RuleContext::Lexer(context)
    }
}

impl<'g> From<ParserRuleContext<'g>> for RuleContext<'g> {
    fn from(context: ParserRuleContext<'g>) -> Self {
        RuleContext::Parser(context)
    }
}

/// Renders the token's rule name.
impl fmt::Display for LexerRuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders the tree as an s-expression of rule names, e.g. `(s a (s a) a)`.
impl fmt::Display for ParserRuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name())?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for RuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleContext::Lexer(context) => fmt::Display::fmt(context, f),
            RuleContext::Parser(context) => fmt::Display::fmt(context, f),
        }
    }
}
