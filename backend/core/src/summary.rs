use serde::{Deserialize, Serialize};

use crate::types::IngredientRecord;

/// Final result of one pipeline run.
///
/// Percentages are computed over matched records only, while unknown
/// ingredients still count toward the denominator — an unknown is
/// neither proven safe nor harmful, so the three percentages need not
/// sum to 100 when unknowns exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub found_ingredients: Vec<IngredientRecord>,
    pub unknown_ingredients: Vec<String>,
    pub safe_percent: f64,
    pub caution_percent: f64,
    pub danger_percent: f64,
    pub product_name: String,
}

impl AnalysisSummary {
    /// All-zero summary for inputs that produced no candidates.
    pub fn empty(product_name: impl Into<String>) -> Self {
        Self {
            found_ingredients: Vec::new(),
            unknown_ingredients: Vec::new(),
            safe_percent: 0.0,
            caution_percent: 0.0,
            danger_percent: 0.0,
            product_name: product_name.into(),
        }
    }

    /// Overall safety reading derived from the percentage breakdown.
    pub fn verdict(&self) -> Verdict {
        if self.danger_percent >= 20.0 {
            Verdict::Harmful
        } else if self.caution_percent >= 40.0 || self.danger_percent > 0.0 {
            Verdict::UseWithCaution
        } else if self.safe_percent >= 50.0 {
            Verdict::GenerallySafe
        } else {
            Verdict::Unknown
        }
    }
}

/// Coarse overall safety level for a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Harmful,
    UseWithCaution,
    GenerallySafe,
    /// Not enough data to call it either way.
    Unknown,
}
