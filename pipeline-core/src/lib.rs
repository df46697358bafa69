//! Pipeline Core
//!
//! Connects the lexer and parser frameworks into a message recognizer: a
//! message belongs to a grammar's language iff it tokenizes and some
//! derivation of the start rule covers every token.

pub mod message_set;
pub mod recognizer;

pub use message_set::MessageSet;
pub use recognizer::{Recognizer, Verdict};
