use pipeline_core::{MessageSet, Recognizer, Verdict};

const SMALL: &str = r#"0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: "a"
5: "b"

ababbb
bababa
abbbab
aaabbb
aaaabbb"#;

const LOOPING: &str = r#"42: 9 14 | 10 1
9: 14 27 | 1 26
10: 23 14 | 28 1
1: "a"
11: 42 31
5: 1 14 | 15 1
19: 14 1 | 14 14
12: 24 14 | 19 1
16: 15 1 | 14 14
31: 14 17 | 1 13
6: 14 14 | 1 14
2: 1 24 | 14 4
0: 8 11
13: 14 3 | 1 12
15: 1 | 14
17: 14 2 | 1 7
23: 25 1 | 22 14
28: 16 1
4: 1 1
20: 14 14 | 1 15
3: 5 14 | 16 1
27: 1 6 | 14 18
14: "b"
21: 14 1 | 1 14
25: 1 1 | 1 14
22: 14 14
8: 42
26: 14 22 | 1 20
18: 15 15
7: 14 5 | 1 21
24: 14 1

abbbbbabbbaaaababbaabbbbabababbbabbbbbbabaaaa
bbabbbbaabaabba
babbbbaabbbbbabbbbbbaabaaabaaa
aaabbbbbbaaaabaababaabababbabaaabbababababaaa
bbbbbbbaaaabbbbaaabbabaaa
bbbababbbbaaaaaaaabbababaaababaabab
ababaaaaaabaaab
ababaaaaabbbaba
baabbaaaabbaaaababbaababb
abbbbabbbbaaaababbbbbbaaaababb
aaaaabbaabaaaaababaa
aaaabbaaaabbaaa
aaaabbaabbaaaaaaabbbabbbaaabbaabaaa
babaaabbbaaabaababbaabababaaab
aabbbbbaabbbaaaaaabbbbbababaaaaabbaaabba"#;

const LOOP_OVERLAY: &str = "8: 42 | 42 8\n11: 42 31 | 42 11 31";

fn build(set: &MessageSet, overlay: &str) -> Recognizer {
    Recognizer::from_source(&set.grammar, overlay, "0").unwrap()
}

#[test]
fn test_small_grammar_accepts_two_messages() {
    let set = MessageSet::parse(SMALL);
    assert_eq!(set.messages.len(), 5);

    let recognizer = build(&set, "");
    assert_eq!(recognizer.count_accepted(&set.messages), 2);
    assert!(recognizer.accepts("ababbb"));
    assert!(recognizer.accepts("abbbab"));
    assert!(!recognizer.accepts("aaaabbb"));
}

#[test]
fn test_fixed_grammar_accepts_three_messages() {
    let set = MessageSet::parse(LOOPING);
    assert_eq!(set.messages.len(), 15);
    assert_eq!(build(&set, "").count_accepted(&set.messages), 3);
}

#[test]
fn test_looping_overlay_accepts_twelve_messages() {
    let set = MessageSet::parse(LOOPING);
    let recognizer = build(&set, LOOP_OVERLAY);
    assert_eq!(recognizer.count_accepted(&set.messages), 12);

    let accepted: Vec<&str> = set
        .messages
        .iter()
        .map(String::as_str)
        .filter(|message| recognizer.accepts(message))
        .collect();
    assert!(accepted.contains(&"bbabbbbaabaabba"));
    assert!(!accepted.contains(&"aaaabbaaaabbaaa"));
}

#[test]
fn test_overlay_keeps_rule_order() {
    let set = MessageSet::parse(LOOPING);
    let fixed = build(&set, "");
    let looping = build(&set, LOOP_OVERLAY);
    assert_eq!(
        fixed.grammar().parser_index("8"),
        looping.grammar().parser_index("8")
    );
    assert_eq!(
        fixed.grammar().parser_index("11"),
        looping.grammar().parser_index("11")
    );
}

#[test]
fn test_check_agrees_with_accepts() {
    let set = MessageSet::parse(SMALL);
    let recognizer = build(&set, "");
    for message in &set.messages {
        assert_eq!(
            recognizer.check(message).is_accepted(),
            recognizer.accepts(message)
        );
    }
    assert!(matches!(
        recognizer.check("abc"),
        Verdict::Unlexable { .. }
    ));
}

#[test]
fn test_derivations_of_accepted_message() {
    let set = MessageSet::parse(SMALL);
    let recognizer = build(&set, "");
    let trees = recognizer.derivations("ababbb");
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].name(), "0");
    assert!(recognizer.derivations("bababa").is_empty());
    assert!(recognizer.derivations("abc").is_empty());
}
