//! Lexer Framework
//!
//! Ordered first-match tokenization of input text against the literal
//! rules of a [`Grammar`](grammar_framework::Grammar).

pub mod cursor;
pub mod lexer;
pub mod traits;

pub use cursor::Cursor;
pub use grammar_framework::{Position, TokenStream};
pub use lexer::{tokenize, Lexer};
pub use traits::LexingRule;
