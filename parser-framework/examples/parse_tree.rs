//! Prints every parse tree of a message under an ambiguous grammar, before
//! and after patching one rule to be self-referential.

use grammar_framework::Grammar;
use lexer_framework::tokenize;
use parser_framework::{Parser, Spanned};

const GRAMMAR: &str = r#"a: "1"
b: "2"
pair: a b | a a
s: pair | a"#;

const OVERLAY: &str = "s: pair s | pair | a s | a";

fn main() {
    let message = "1121";
    for (label, overlay) in [("base", ""), ("patched", OVERLAY)] {
        let grammar = match Grammar::with_overlay(GRAMMAR, overlay) {
            Ok(grammar) => grammar,
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        };
        let Some(tokens) = tokenize(message, &grammar) else {
            println!("{label}: {message:?} does not lex");
            continue;
        };

        let parser = Parser::new(&grammar);
        println!("{label}: {message:?} -> {:?}", tokens.as_slice());
        for tree in parser.parse(&tokens, "s") {
            let full = if tree.stop_index() == tokens.len() { "full" } else { "prefix" };
            println!("  [{full}] {tree}");
        }
    }
}
