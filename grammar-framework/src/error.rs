use crate::Position;

/// Errors raised while building a [`Grammar`](crate::Grammar).
///
/// These are contract violations in the grammar text itself. A build that
/// hits one of them returns no grammar at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// Two rules in the base text share a name.
    #[error("duplicate grammar rule `{name}` at {position}")]
    DuplicateRule { name: String, position: Position },

    /// Two rules in the overlay text share a name.
    #[error("duplicate overlay rule `{name}` at {position}")]
    DuplicateOverlayRule { name: String, position: Position },

    /// An alternative references a name that no rule defines.
    #[error("rule `{rule}` at {position} references unknown rule `{name}`")]
    UnknownRule {
        rule: String,
        name: String,
        position: Position,
    },
}

impl GrammarError {
    /// Returns the position of the grammar line that caused the error.
    pub fn position(&self) -> Position {
        match self {
            GrammarError::DuplicateRule { position, .. }
            | GrammarError::DuplicateOverlayRule { position, .. }
            | GrammarError::UnknownRule { position, .. } => *position,
        }
    }
}
