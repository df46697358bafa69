use std::ops::Range;

/// A parse-tree node covering a contiguous run of tokens.
pub trait Spanned {
    /// Index of the first token covered.
    fn start_index(&self) -> usize;

    /// Index one past the last token covered.
    fn stop_index(&self) -> usize;

    /// Returns the covered token range `[start_index, stop_index)`.
    fn span(&self) -> Range<usize> {
        self.start_index()..self.stop_index()
    }

    /// Returns the number of tokens covered.
    fn token_count(&self) -> usize {
        self.stop_index() - self.start_index()
    }
}
