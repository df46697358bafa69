//! Parser Framework
//!
//! Exhaustive backtracking parsing of token streams against a
//! [`Grammar`](grammar_framework::Grammar), producing every parse tree.

pub mod context;
pub mod parser;
pub mod traits;

pub use context::{LexerRuleContext, ParserRuleContext, RuleContext};
pub use parser::{parse, Parser};
pub use traits::Spanned;
