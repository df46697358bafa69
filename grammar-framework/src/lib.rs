//! Grammar Framework
//!
//! The rule-set model shared by the lexer and parser frameworks: lexer and
//! parser rules, the [`Grammar`] that owns them, the text format grammars are
//! written in, and the token streams produced against a grammar.

pub mod builder;
pub mod error;
pub mod grammar;
pub mod position;
pub mod rule;
pub mod token_stream;

pub use builder::build_grammar;
pub use error::GrammarError;
pub use grammar::Grammar;
pub use position::Position;
pub use rule::{Alternative, LexerRule, ParserRule, RuleRef};
pub use token_stream::TokenStream;
