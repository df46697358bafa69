use crate::context::{LexerRuleContext, ParserRuleContext, RuleContext};
use crate::traits::Spanned;
use grammar_framework::{Grammar, RuleRef};
use std::ops::ControlFlow;

type StopVisitor<'a> = dyn FnMut(usize) -> ControlFlow<()> + 'a;

/// A backtracking recursive-descent parser that enumerates every parse
/// tree of a token stream.
///
/// The grammar must not be left-recursive: a rule that can derive itself
/// without consuming a token recurses without bound. Results are not
/// memoized, so a genuinely ambiguous grammar yields one tree per
/// derivation, and the work can grow exponentially with input length.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Returns every derivation of `start_rule` that begins at token 0.
    ///
    /// Derivations that stop before the end of `tokens` are included; use
    /// [`parse_full`](Self::parse_full) for those covering the whole stream.
    /// Returns an empty vector when `start_rule` is not a parser rule.
    pub fn parse(&self, tokens: &[usize], start_rule: &str) -> Vec<ParserRuleContext<'g>> {
        match self.grammar.parser_index(start_rule) {
            Some(index) => self.parse_rule(index, 0, tokens),
            None => Vec::new(),
        }
    }

    /// Returns the derivations of `start_rule` that consume every token.
    pub fn parse_full(
        &self,
        tokens: &[usize],
        start_rule: &str,
    ) -> Vec<ParserRuleContext<'g>> {
        self.parse(tokens, start_rule)
            .into_iter()
            .filter(|context| context.stop_index() == tokens.len())
            .collect()
    }

    /// Returns true if at least one derivation of `start_rule` consumes every
    /// token.
    ///
    /// Same answer as `!parse_full(..).is_empty()`, but the search stops at
    /// the first full derivation and builds no trees.
    pub fn has_full_parse(&self, tokens: &[usize], start_rule: &str) -> bool {
        let Some(index) = self.grammar.parser_index(start_rule) else {
            return false;
        };
        let end = tokens.len();
        self.visit_rule(index, 0, tokens, &mut |stop| {
            if stop == end {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    fn parse_rule(
        &self,
        index: usize,
        start: usize,
        tokens: &[usize],
    ) -> Vec<ParserRuleContext<'g>> {
        let rule = &self.grammar.parser_rules()[index];
        rule.alternatives()
            .iter()
            .flat_map(|alternative| self.parse_alternative(alternative, start, tokens))
            .map(|children| ParserRuleContext::new(start, index, rule, children))
            .collect()
    }

    /// Returns every way to match `alternative` from `start`, each as the
    /// list of element contexts. An empty alternative matches nothing.
    fn parse_alternative(
        &self,
        alternative: &[RuleRef],
        start: usize,
        tokens: &[usize],
    ) -> Vec<Vec<RuleContext<'g>>> {
        let Some((first, rest)) = alternative.split_first() else {
            return Vec::new();
        };
        let heads = self.parse_element(*first, start, tokens);
        if rest.is_empty() {
            return heads.into_iter().map(|head| vec![head]).collect();
        }

        let mut sequences = Vec::new();
        for head in heads {
            for tail in self.parse_alternative(rest, head.stop_index(), tokens) {
                let mut sequence = Vec::with_capacity(tail.len() + 1);
                sequence.push(head.clone());
                sequence.extend(tail);
                sequences.push(sequence);
            }
        }
        sequences
    }

    fn parse_element(
        &self,
        element: RuleRef,
        start: usize,
        tokens: &[usize],
    ) -> Vec<RuleContext<'g>> {
        match element {
            RuleRef::Lexer(index) if tokens.get(start) == Some(&index) => {
                let rule = &self.grammar.lexer_rules()[index];
                vec![LexerRuleContext::new(start, index, rule).into()]
            }
            RuleRef::Lexer(_) => Vec::new(),
            RuleRef::Parser(index) => self
                .parse_rule(index, start, tokens)
                .into_iter()
                .map(RuleContext::from)
                .collect(),
        }
    }

    /// Walks the same derivations as `parse_rule`, reporting only the stop
    /// index of each, until `on_stop` breaks.
    fn visit_rule(
        &self,
        index: usize,
        start: usize,
        tokens: &[usize],
        on_stop: &mut StopVisitor<'_>,
    ) -> ControlFlow<()> {
        for alternative in self.grammar.parser_rules()[index].alternatives() {
            self.visit_sequence(alternative, start, tokens, on_stop)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_sequence(
        &self,
        sequence: &[RuleRef],
        start: usize,
        tokens: &[usize],
        on_stop: &mut StopVisitor<'_>,
    ) -> ControlFlow<()> {
        let Some((first, rest)) = sequence.split_first() else {
            return ControlFlow::Continue(());
        };
        let mut then = |stop: usize| {
            if rest.is_empty() {
                on_stop(stop)
            } else {
                self.visit_sequence(rest, stop, tokens, &mut *on_stop)
            }
        };
        match *first {
            RuleRef::Lexer(index) if tokens.get(start) == Some(&index) => then(start + 1),
            RuleRef::Lexer(_) => ControlFlow::Continue(()),
            RuleRef::Parser(index) => self.visit_rule(index, start, tokens, &mut then),
        }
    }
}

/// Returns every derivation of `start_rule` over `tokens` that begins at
/// token 0, including those that stop early.
pub fn parse<'g>(
    tokens: &[usize],
    grammar: &'g Grammar,
    start_rule: &str,
) -> Vec<ParserRuleContext<'g>> {
    Parser::new(grammar).parse(tokens, start_rule)
}
