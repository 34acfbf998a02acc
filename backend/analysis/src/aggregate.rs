//! Tally classification outcomes into an `AnalysisSummary`.

use nutriscan_core::{AnalysisSummary, Category, ClassificationOutcome};

/// Partition outcomes and compute the category percentage breakdown.
///
/// Unknown candidates count toward the denominator but toward no
/// category, so the three percentages only sum to 100 when everything
/// resolved.
pub fn summarize(
    outcomes: Vec<ClassificationOutcome>,
    product_name: impl Into<String>,
) -> AnalysisSummary {
    let mut found = Vec::new();
    let mut unknown = Vec::new();
    for outcome in outcomes {
        match outcome {
            ClassificationOutcome::Matched(record)
            | ClassificationOutcome::HeuristicMatch(record) => found.push(record),
            ClassificationOutcome::Unknown(raw) => unknown.push(raw),
        }
    }

    let total = found.len() + unknown.len();
    let percent = |category: Category| -> f64 {
        if total == 0 {
            return 0.0;
        }
        let count = found.iter().filter(|r| r.category == category).count();
        100.0 * count as f64 / total as f64
    };

    let safe_percent = percent(Category::Safe);
    let caution_percent = percent(Category::Caution);
    let danger_percent = percent(Category::Danger);

    AnalysisSummary {
        found_ingredients: found,
        unknown_ingredients: unknown,
        safe_percent,
        caution_percent,
        danger_percent,
        product_name: product_name.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_core::IngredientRecord;

    fn matched(name: &str, category: Category) -> ClassificationOutcome {
        ClassificationOutcome::Matched(IngredientRecord {
            name: name.into(),
            impact: String::new(),
            category,
            description: None,
        })
    }

    #[test]
    fn empty_outcomes_give_all_zero() {
        let summary = summarize(vec![], "Food Product");
        assert_eq!(summary.safe_percent, 0.0);
        assert_eq!(summary.caution_percent, 0.0);
        assert_eq!(summary.danger_percent, 0.0);
        assert!(summary.found_ingredients.is_empty());
    }

    #[test]
    fn percentages_sum_to_100_without_unknowns() {
        let summary = summarize(
            vec![
                matched("oats", Category::Safe),
                matched("sugar", Category::Caution),
                matched("sugar", Category::Caution),
                matched("msg", Category::Danger),
            ],
            "Granola",
        );
        let sum = summary.safe_percent + summary.caution_percent + summary.danger_percent;
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(summary.caution_percent, 50.0);
    }

    #[test]
    fn unknowns_dilute_the_percentages() {
        let summary = summarize(
            vec![
                matched("sugar", Category::Caution),
                ClassificationOutcome::Unknown("water".into()),
            ],
            "Soda",
        );
        assert_eq!(summary.caution_percent, 50.0);
        assert_eq!(summary.safe_percent, 0.0);
        assert_eq!(summary.danger_percent, 0.0);
        assert_eq!(summary.unknown_ingredients, ["water"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let summary = summarize(
            vec![
                matched("sugar", Category::Caution),
                matched("sugar", Category::Caution),
            ],
            "Candy",
        );
        assert_eq!(summary.found_ingredients.len(), 2);
    }
}
