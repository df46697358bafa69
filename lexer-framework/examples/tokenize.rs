//! Tokenizes a few inputs against a small grammar and prints the rule names.

use grammar_framework::Grammar;
use lexer_framework::Lexer;

const GRAMMAR: &str = r#"let: "let"
space: " "
eq: "="
digit: "1"
name: "x""#;

fn main() {
    let grammar = match Grammar::parse(GRAMMAR) {
        Ok(grammar) => grammar,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    for input in ["let x = 11", "let y = 1"] {
        println!("Tokenizing: {input:?}");
        let mut lexer = Lexer::for_grammar(input, &grammar);
        match lexer.tokenize() {
            Some(tokens) => {
                for (i, token) in tokens.iter().enumerate() {
                    let name = grammar.lexer_rules()[*token].name();
                    println!("  {i}: {name}");
                }
            }
            None => println!("  no lexer rule matches at {}", lexer.position()),
        }
    }
}
