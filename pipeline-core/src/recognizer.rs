use grammar_framework::{Grammar, GrammarError, Position};
use lexer_framework::{tokenize, Lexer};
use parser_framework::{Parser, ParserRuleContext};

/// The outcome of checking one message against a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The message has at least one full derivation.
    Accepted { derivations: usize },
    /// The message lexes, but no derivation covers all of its tokens.
    Rejected,
    /// No lexer rule matches at `position`.
    Unlexable { position: Position },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}

/// Drives the lexer and parser to decide whether messages belong to the
/// language of a grammar's start rule.
///
/// A message is accepted iff it tokenizes and at least one derivation of the
/// start rule consumes every token. Lexing failures, parse failures and
/// prefix-only derivations all count as rejection.
#[derive(Debug, Clone)]
pub struct Recognizer {
    grammar: Grammar,
    start_rule: String,
}

impl Recognizer {
    pub fn new(grammar: Grammar, start_rule: impl Into<String>) -> Self {
        Self {
            grammar,
            start_rule: start_rule.into(),
        }
    }

    /// Builds the grammar from text, applying `overlay`, and wraps it.
    pub fn from_source(
        source: &str,
        overlay: &str,
        start_rule: impl Into<String>,
    ) -> Result<Self, GrammarError> {
        let grammar = Grammar::with_overlay(source, overlay)?;
        Ok(Self::new(grammar, start_rule))
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn start_rule(&self) -> &str {
        &self.start_rule
    }

    /// Returns true if `message` has a full derivation.
    pub fn accepts(&self, message: &str) -> bool {
        match tokenize(message, &self.grammar) {
            Some(tokens) => self.parser().has_full_parse(&tokens, &self.start_rule),
            None => false,
        }
    }

    /// Checks `message` and reports why it was rejected, or how many full
    /// derivations it has.
    pub fn check(&self, message: &str) -> Verdict {
        let mut lexer = Lexer::for_grammar(message, &self.grammar);
        let Some(tokens) = lexer.tokenize() else {
            return Verdict::Unlexable {
                position: lexer.position(),
            };
        };
        match self.parser().parse_full(&tokens, &self.start_rule).len() {
            0 => Verdict::Rejected,
            derivations => Verdict::Accepted { derivations },
        }
    }

    /// Returns every full derivation of `message`; empty when rejected.
    pub fn derivations(&self, message: &str) -> Vec<ParserRuleContext<'_>> {
        match tokenize(message, &self.grammar) {
            Some(tokens) => self.parser().parse_full(&tokens, &self.start_rule),
            None => Vec::new(),
        }
    }

    /// Counts the accepted messages.
    pub fn count_accepted<I>(&self, messages: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        messages
            .into_iter()
            .filter(|message| self.accepts(message.as_ref()))
            .count()
    }

    fn parser(&self) -> Parser<'_> {
        Parser::new(&self.grammar)
    }
}
