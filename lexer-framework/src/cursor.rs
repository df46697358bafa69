use grammar_framework::Position;

/// A cursor for traversing input text during lexing.
///
/// It tracks the byte offset into the input together with the line and
/// column of that offset.
#[derive(Debug, Clone)]
pub struct Cursor<'input> {
    input: &'input str,
    current: usize,
    position: Position,
}

impl<'input> Cursor<'input> {
    /// Creates a new cursor at the start of the input.
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            current: 0,
            position: Position::new(),
        }
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.input.len()
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the remaining input from the current position.
    pub fn remaining(&self) -> &'input str {
        &self.input[self.current..]
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;

        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        self.current += ch.len_utf8();
        self.position.offset = self.current;

        Some(ch)
    }

    /// Consumes `len` bytes of input and returns them.
    ///
    /// `len` is clamped to the remaining input and must end on a character
    /// boundary, as any length returned by a prefix match does.
    pub fn consume(&mut self, len: usize) -> &'input str {
        let start = self.current;
        let end = (start + len).min(self.input.len());
        while self.current < end {
            if self.advance().is_none() {
                break;
            }
        }
        &self.input[start..self.current]
    }

    /// Resets the cursor to the beginning.
    pub fn reset(&mut self) {
        self.current = 0;
        self.position = Position::new();
    }
}
