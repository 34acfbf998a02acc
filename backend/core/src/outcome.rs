use crate::types::IngredientRecord;

/// Result of classifying one candidate.
///
/// Exactly one outcome exists per candidate; duplicates in the candidate
/// sequence are preserved, never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// Resolved against a knowledge-base record.
    Matched(IngredientRecord),
    /// Resolved by the lexical rule engine; carries a synthetic record.
    HeuristicMatch(IngredientRecord),
    /// Neither the matcher nor the heuristics could place it; carries
    /// the candidate's raw text.
    Unknown(String),
}

impl ClassificationOutcome {
    /// The record behind a match, if any.
    pub fn record(&self) -> Option<&IngredientRecord> {
        match self {
            ClassificationOutcome::Matched(record)
            | ClassificationOutcome::HeuristicMatch(record) => Some(record),
            ClassificationOutcome::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ClassificationOutcome::Unknown(_))
    }
}
