use std::ops::Deref;

/// The lexer-rule indices produced by tokenizing one input.
///
/// Indices are positions in the lexer-rule array of the grammar that
/// produced the stream; a stream is meaningless against any other grammar.
/// It dereferences to `[usize]`, so it can be passed wherever a token slice
/// is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenStream {
    tokens: Vec<usize>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: usize) {
        self.tokens.push(token);
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.tokens
    }
}

impl Deref for TokenStream {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl AsRef<[usize]> for TokenStream {
    fn as_ref(&self) -> &[usize] {
        self
    }
}

impl From<Vec<usize>> for TokenStream {
    fn from(tokens: Vec<usize>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<usize> for TokenStream {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl PartialEq<[usize]> for TokenStream {
    fn eq(&self, other: &[usize]) -> bool {
        self.tokens == other
    }
}

impl PartialEq<Vec<usize>> for TokenStream {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.tokens == other
    }
}
