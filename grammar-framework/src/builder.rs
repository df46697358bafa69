//! Compiles grammar text into a [`Grammar`].
//!
//! Each line of grammar text is either a lexer rule or a parser rule:
//!
//! ```text
//! name: "literal"
//! name: first second | third
//! ```
//!
//! Rule names contain no whitespace, `:` or `"`. Lines matching neither form
//! are skipped. Building happens in two passes: rules are placed by name
//! (applying the overlay), then every name inside an alternative is resolved
//! to an index.

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::rule::{Alternative, LexerRule, ParserRule, RuleRef};
use crate::Position;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static RULE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([^:"\s]+): (?:"(.+)"|((?:[^:"\s]+\s*)+))$"#)
        .expect("grammar rule pattern is valid")
});

/// A rule as written, before its references are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawRule {
    name: String,
    position: Position,
    body: RawBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RawBody {
    Literal(String),
    Alternatives(Vec<Vec<String>>),
}

/// A parser rule that has been placed but whose names are still unresolved.
struct PendingRule {
    name: String,
    position: Position,
    alternatives: Vec<Vec<String>>,
}

impl PendingRule {
    fn resolve(
        self,
        lexer_indices: &HashMap<String, usize>,
        parser_indices: &HashMap<String, usize>,
    ) -> Result<ParserRule, GrammarError> {
        let mut alternatives = Vec::with_capacity(self.alternatives.len());
        for names in &self.alternatives {
            let alternative = names
                .iter()
                .map(|name| {
                    if let Some(&index) = lexer_indices.get(name) {
                        Ok(RuleRef::Lexer(index))
                    } else if let Some(&index) = parser_indices.get(name) {
                        Ok(RuleRef::Parser(index))
                    } else {
                        Err(GrammarError::UnknownRule {
                            rule: self.name.clone(),
                            name: name.clone(),
                            position: self.position,
                        })
                    }
                })
                .collect::<Result<Alternative, _>>()?;
            alternatives.push(alternative);
        }
        Ok(ParserRule::new(self.name, alternatives))
    }
}

/// Builds a grammar from `source`, replacing every rule whose name also
/// appears in `overlay` by the overlay's version.
///
/// A replaced rule keeps the position of the base rule in build order, so
/// its lexer or parser index is the one the base rule would have had.
/// Overlay rules naming no base rule are ignored. Pass an empty overlay to
/// build `source` as is.
///
/// # Errors
///
/// Fails on a duplicate name in `source` or in `overlay`, and on any
/// reference to a name that no placed rule defines.
pub fn build_grammar(source: &str, overlay: &str) -> Result<Grammar, GrammarError> {
    let mut overrides = overlay_rules(overlay)?;

    let mut lexer_rules = Vec::new();
    let mut pending = Vec::new();
    let mut lexer_indices = HashMap::new();
    let mut parser_indices = HashMap::new();

    for rule in rule_lines(source) {
        if lexer_indices.contains_key(&rule.name) || parser_indices.contains_key(&rule.name) {
            return Err(GrammarError::DuplicateRule {
                name: rule.name,
                position: rule.position,
            });
        }
        let rule = overrides.remove(&rule.name).unwrap_or(rule);
        match rule.body {
            RawBody::Literal(text) => {
                lexer_indices.insert(rule.name.clone(), lexer_rules.len());
                lexer_rules.push(LexerRule::new(rule.name, text));
            }
            RawBody::Alternatives(alternatives) => {
                parser_indices.insert(rule.name.clone(), pending.len());
                pending.push(PendingRule {
                    name: rule.name,
                    position: rule.position,
                    alternatives,
                });
            }
        }
    }

    let parser_rules = pending
        .into_iter()
        .map(|rule| rule.resolve(&lexer_indices, &parser_indices))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grammar::from_parts(
        lexer_rules,
        parser_rules,
        lexer_indices,
        parser_indices,
    ))
}

fn overlay_rules(overlay: &str) -> Result<HashMap<String, RawRule>, GrammarError> {
    let mut rules = HashMap::new();
    for rule in rule_lines(overlay) {
        if rules.contains_key(&rule.name) {
            return Err(GrammarError::DuplicateOverlayRule {
                name: rule.name,
                position: rule.position,
            });
        }
        rules.insert(rule.name.clone(), rule);
    }
    Ok(rules)
}

/// Yields the well-formed rules of `text` in order, skipping other lines.
fn rule_lines(text: &str) -> impl Iterator<Item = RawRule> + '_ {
    let mut offset = 0;
    text.split_inclusive('\n')
        .enumerate()
        .filter_map(move |(index, raw_line)| {
            let position = Position::line_start(index + 1, offset);
            offset += raw_line.len();
            let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            parse_rule_line(line, position)
        })
}

fn parse_rule_line(line: &str, position: Position) -> Option<RawRule> {
    let captures = RULE_LINE.captures(line)?;
    let name = captures.get(1)?.as_str().to_owned();

    if let Some(literal) = captures.get(2) {
        return Some(RawRule {
            name,
            position,
            body: RawBody::Literal(literal.as_str().to_owned()),
        });
    }

    let alternatives = captures
        .get(3)?
        .as_str()
        .split('|')
        .map(|alternative| alternative.split_whitespace().map(str::to_owned).collect())
        .collect();
    Some(RawRule {
        name,
        position,
        body: RawBody::Alternatives(alternatives),
    })
}
