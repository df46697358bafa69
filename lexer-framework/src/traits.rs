use grammar_framework::LexerRule;

/// A rule the lexer can try at the current input position.
pub trait LexingRule {
    /// Returns the number of bytes this rule matches at the start of
    /// `remaining`, or `None` if it does not match there.
    ///
    /// The lexer ignores zero-length matches: a token must consume input.
    fn match_len(&self, remaining: &str) -> Option<usize>;
}

/// Literal rules match by exact prefix equality.
impl LexingRule for LexerRule {
    fn match_len(&self, remaining: &str) -> Option<usize> {
        remaining
            .starts_with(self.text())
            .then_some(self.text().len())
    }
}
