use crate::cursor::Cursor;
use crate::traits::LexingRule;
use grammar_framework::{Grammar, LexerRule, Position, TokenStream};

/// A lexer that turns input text into lexer-rule indices.
///
/// At each position the rules are tried in the order given, and the first
/// one that matches wins. Rules are never reordered and there is no
/// longest-match disambiguation: a literal listed before a longer literal
/// that starts with it hides the longer one. Grammar authors control
/// tokenization through rule order.
pub struct Lexer<'input, 'r, R = LexerRule> {
    cursor: Cursor<'input>,
    rules: &'r [R],
}

impl<'input, 'r, R> Lexer<'input, 'r, R>
where
    R: LexingRule,
{
    /// Creates a new lexer over `input` trying `rules` in order.
    pub fn new(input: &'input str, rules: &'r [R]) -> Self {
        Self {
            cursor: Cursor::new(input),
            rules,
        }
    }

    /// Returns the position of the cursor.
    ///
    /// After a failed [`tokenize`](Self::tokenize) this is where no rule
    /// matched.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns true once the whole input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Matches the next token and returns the index of the rule that
    /// matched it. The cursor does not move when no rule matches.
    pub fn next_token(&mut self) -> Option<usize> {
        let remaining = self.cursor.remaining();
        let (index, len) = self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.match_len(remaining)
                .filter(|&len| len > 0)
                .map(|len| (index, len))
        })?;
        self.cursor.consume(len);
        Some(index)
    }

    /// Collects the tokens of the remaining input.
    ///
    /// Returns `None` if some position of the input matches no rule.
    pub fn tokenize(&mut self) -> Option<TokenStream> {
        let tokens: TokenStream = self.by_ref().collect();
        self.is_eof().then_some(tokens)
    }
}

impl<'input, 'g> Lexer<'input, 'g, LexerRule> {
    /// Creates a lexer using the lexer rules of `grammar` in build order.
    pub fn for_grammar(input: &'input str, grammar: &'g Grammar) -> Self {
        Self::new(input, grammar.lexer_rules())
    }
}

/// The lexer yields rule indices until the input is consumed or no rule
/// matches. Check [`Lexer::is_eof`] afterwards to tell the two apart.
impl<'input, 'r, R> Iterator for Lexer<'input, 'r, R>
where
    R: LexingRule,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_eof() {
            return None;
        }
        self.next_token()
    }
}

/// Tokenizes `input` against the lexer rules of `grammar`.
///
/// Returns `None` when some part of the input matches no lexer rule. Empty
/// input yields an empty stream.
pub fn tokenize(input: &str, grammar: &Grammar) -> Option<TokenStream> {
    Lexer::for_grammar(input, grammar).tokenize()
}
