/// Grammar text and candidate messages read from a single document.
///
/// The document holds grammar lines, a blank line, then one message per
/// line. Without a blank line the whole document is grammar text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSet {
    pub grammar: String,
    pub messages: Vec<String>,
}

impl MessageSet {
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();
        let grammar: Vec<&str> = lines.by_ref().take_while(|line| !line.is_empty()).collect();
        let messages = lines
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self {
            grammar: grammar.join("\n"),
            messages,
        }
    }

    /// Reads messages alone, one per line, skipping blank lines.
    pub fn messages_from(text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
