use grammar_framework::Grammar;
use lexer_framework::tokenize;
use parser_framework::{parse, Parser, ParserRuleContext, RuleContext, Spanned};

fn build(source: &str) -> Grammar {
    Grammar::parse(source).unwrap()
}

/// Asserts that every node's children are adjacent and cover its span.
fn assert_contiguous(context: &ParserRuleContext<'_>) {
    let children = context.children();
    assert!(!children.is_empty());
    assert_eq!(children[0].start_index(), context.start_index());
    assert_eq!(children[children.len() - 1].stop_index(), context.stop_index());
    for pair in children.windows(2) {
        assert_eq!(pair[0].stop_index(), pair[1].start_index());
    }
    for child in children {
        if let RuleContext::Parser(node) = child {
            assert_contiguous(node);
        }
    }
}

#[test]
fn test_sequence_of_two_tokens() {
    let grammar = build("a: \"1\"\nb: \"2\"\ns: a b");
    let tokens = tokenize("12", &grammar).unwrap();
    assert_eq!(tokens, vec![0, 1]);

    let trees = parse(&tokens, &grammar, "s");
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].span(), 0..2);
    assert_eq!(trees[0].to_string(), "(s a b)");
    assert_contiguous(&trees[0]);
}

#[test]
fn test_prefix_derivations_are_not_full() {
    let grammar = build("a: \"1\"\ns: a | a a");
    let tokens = tokenize("11", &grammar).unwrap();
    assert_eq!(tokens, vec![0, 0]);

    let parser = Parser::new(&grammar);
    let all = parser.parse(&tokens, "s");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].span(), 0..1);
    assert_eq!(all[1].span(), 0..2);

    let full = parser.parse_full(&tokens, "s");
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].children().len(), 2);
    assert_eq!(full[0].to_string(), "(s a a)");
}

#[test]
fn test_overlay_enables_self_recursion() {
    let base = "a: \"1\"\ns: a";
    let plain = build(base);
    let tokens = tokenize("111", &plain).unwrap();
    assert!(Parser::new(&plain).parse_full(&tokens, "s").is_empty());

    let patched = Grammar::with_overlay(base, "s: a s a | a").unwrap();
    let parser = Parser::new(&patched);
    let full = parser.parse_full(&tokens, "s");
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].to_string(), "(s a (s a) a)");
    assert_contiguous(&full[0]);
    assert!(parser.has_full_parse(&tokens, "s"));
}

#[test]
fn test_unlexable_message_is_rejected_before_parsing() {
    let grammar = build("a: \"1\"\nb: \"2\"\ns: a b");
    assert!(tokenize("1x", &grammar).is_none());
}

#[test]
fn test_ambiguity_is_enumerated_not_collapsed() {
    // Kept small: the number of trees grows like the Fibonacci sequence.
    let grammar = build("a: \"a\"\ns: a | a s | a a s");
    let parser = Parser::new(&grammar);
    let expected = [1, 1, 2, 3, 5, 8, 13, 21];
    for (len, count) in (1..=8).zip(expected) {
        let tokens = tokenize(&"a".repeat(len), &grammar).unwrap();
        let full = parser.parse_full(&tokens, "s");
        assert_eq!(full.len(), count, "derivations of {len} tokens");
        for tree in &full {
            assert_contiguous(tree);
        }
    }
}

#[test]
fn test_structurally_identical_alternatives_give_duplicates() {
    let grammar = build("a: \"1\"\ns: a | a");
    let tokens = tokenize("1", &grammar).unwrap();
    let full = Parser::new(&grammar).parse_full(&tokens, "s");
    assert_eq!(full.len(), 2);
    assert_eq!(full[0], full[1]);
}

#[test]
fn test_nested_parser_rules() {
    let grammar = build(
        r#"0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: "a"
5: "b""#,
    );
    let parser = Parser::new(&grammar);
    let accepted = ["ababbb", "abbbab"];
    let rejected = ["bababa", "aaabbb", "aaaabbb"];

    for message in accepted {
        let tokens = tokenize(message, &grammar).unwrap();
        let full = parser.parse_full(&tokens, "0");
        assert_eq!(full.len(), 1, "{message}");
        assert_eq!(full[0].leaves().len(), message.len());
    }
    for message in rejected {
        let tokens = tokenize(message, &grammar).unwrap();
        assert!(parser.parse_full(&tokens, "0").is_empty(), "{message}");
        assert!(!parser.has_full_parse(&tokens, "0"), "{message}");
    }
}

#[test]
fn test_leaves_match_tokens() {
    let grammar = build("a: \"a\"\nb: \"b\"\np: a b | b a\ns: p | p s");
    let tokens = tokenize("abbaab", &grammar).unwrap();
    let full = Parser::new(&grammar).parse_full(&tokens, "s");
    assert_eq!(full.len(), 1);

    let leaves: Vec<usize> = full[0]
        .leaves()
        .iter()
        .map(|leaf| leaf.rule_index())
        .collect();
    assert_eq!(leaves, tokens.as_slice());
}

#[test]
fn test_parse_is_deterministic() {
    let grammar = build("a: \"a\"\ns: a | a s | a a s");
    let tokens = tokenize("aaaaa", &grammar).unwrap();
    let first = parse(&tokens, &grammar, "s");
    let second = parse(&tokens, &grammar, "s");
    assert_eq!(first, second);
}

#[test]
fn test_rebuilt_grammar_parses_identically() {
    let source = "a: \"a\"\nb: \"b\"\ns: a s b | a b";
    let first = build(source);
    let second = build(source);
    let tokens = tokenize("aabb", &first).unwrap();
    assert_eq!(tokenize("aabb", &second).unwrap(), tokens);

    let rendered = |grammar: &Grammar| -> Vec<String> {
        parse(&tokens, grammar, "s")
            .iter()
            .map(ToString::to_string)
            .collect()
    };
    assert_eq!(rendered(&first), rendered(&second));
    assert_eq!(rendered(&first), vec!["(s a (s a b) b)"]);
}
