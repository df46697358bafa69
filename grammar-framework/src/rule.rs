/// A reference from a parser-rule alternative to another rule.
///
/// The index points into the owning grammar's lexer-rule or parser-rule
/// array. References are resolved once when the grammar is built, so the
/// parser never looks rules up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleRef {
    Lexer(usize),
    Parser(usize),
}

impl RuleRef {
    /// Returns the referenced index, regardless of the rule kind.
    pub fn index(&self) -> usize {
        match self {
            RuleRef::Lexer(index) | RuleRef::Parser(index) => *index,
        }
    }

    pub fn is_lexer(&self) -> bool {
        matches!(self, RuleRef::Lexer(_))
    }
}

/// One alternative of a parser rule: an ordered sequence of references.
pub type Alternative = Vec<RuleRef>;

/// A named literal. It matches when the remaining input starts with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerRule {
    name: String,
    text: String,
}

impl LexerRule {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the literal text this rule matches.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A named set of alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserRule {
    name: String,
    alternatives: Vec<Alternative>,
}

impl ParserRule {
    pub fn new(name: impl Into<String>, alternatives: Vec<Alternative>) -> Self {
        Self {
            name: name.into(),
            alternatives,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alternatives in the order they were written.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }
}
