//! Tiered candidate resolution against the knowledge base.
//!
//! Tiers short-circuit at the first success: exact → cleaned →
//! compound head noun → nutrient prefix → category-prioritized
//! substring → per-word. The substring tier is deliberately
//! risk-averse: a danger-category match always wins over a caution or
//! safe match, even when the latter is textually closer.

use once_cell::sync::Lazy;
use regex::Regex;

use nutriscan_core::{Candidate, Category, ClassificationOutcome, IngredientRecord};
use nutriscan_kb::KnowledgeBase;

/// Numeric dose fragments embedded in nutrient entries ("calcium 10mg").
static DOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\s*(?:mcg|mg|iu|g|%)").unwrap());

/// Leading words that mark a nutrient entry ("vitamin a palmitate").
const NUTRIENT_PREFIXES: &[&str] = &["calcium", "iron", "potassium", "vitamin", "sodium"];

/// Substring-tier category order. Danger first, always.
const CATEGORY_PRIORITY: &[Category] = &[Category::Danger, Category::Caution, Category::Safe];

/// Resolve one candidate. Never mutates the knowledge base.
pub fn resolve(candidate: &Candidate, kb: &KnowledgeBase) -> ClassificationOutcome {
    let name = candidate.normalized_text.as_str();

    // Tier 1: exact.
    if let Some(record) = kb.get(name) {
        return ClassificationOutcome::Matched(record.clone());
    }

    // Tier 2: strip dose fragments and retry ("calcium 10mg" → "calcium").
    let cleaned = DOSE_RE.replace_all(name, "");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned != name {
        if let Some(record) = kb.get(&cleaned) {
            return ClassificationOutcome::Matched(record.clone());
        }
    }

    // Tier 3: compound decomposition — the last word is the presumptive
    // head noun ("sea salt" → "salt").
    if name.contains(' ') {
        if let Some(head) = name.split_whitespace().next_back() {
            if let Some(record) = kb.get(head) {
                return ClassificationOutcome::Matched(record.clone());
            }
        }
    }

    // Tier 4: nutrient prefix ("vitamin b12" → "vitamin").
    if let Some(first) = name.split_whitespace().next() {
        if NUTRIENT_PREFIXES.contains(&first) {
            if let Some(record) = kb.get(first) {
                return ClassificationOutcome::Matched(record.clone());
            }
        }
    }

    // Tier 5: category-prioritized substring.
    if let Some(record) = substring_match(name, kb) {
        return ClassificationOutcome::Matched(record.clone());
    }

    // Tier 6: per-word retry of tiers 1 and 5.
    if name.contains(' ') {
        for word in name.split_whitespace().filter(|w| w.len() >= 3) {
            if let Some(record) = kb.get(word) {
                return ClassificationOutcome::Matched(record.clone());
            }
            if let Some(record) = substring_match(word, kb) {
                return ClassificationOutcome::Matched(record.clone());
            }
        }
    }

    ClassificationOutcome::Unknown(candidate.raw_text.clone())
}

/// All KB names that contain or are contained by `name`, evaluated
/// danger-first; within the winning category the minimal length
/// difference wins, first in KB iteration order on ties.
fn substring_match<'kb>(name: &str, kb: &'kb KnowledgeBase) -> Option<&'kb IngredientRecord> {
    let pool: Vec<&IngredientRecord> = kb
        .iter()
        .filter(|r| r.name.contains(name) || name.contains(r.name.as_str()))
        .collect();

    for category in CATEGORY_PRIORITY {
        let mut best: Option<(&IngredientRecord, usize)> = None;
        for record in pool.iter().filter(|r| r.category == *category) {
            let diff = record.name.len().abs_diff(name.len());
            match best {
                Some((_, best_diff)) if best_diff <= diff => {}
                _ => best = Some((record, diff)),
            }
        }
        if let Some((record, _)) = best {
            return Some(record);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: Category) -> IngredientRecord {
        IngredientRecord {
            name: name.into(),
            impact: String::new(),
            category,
            description: None,
        }
    }

    fn kb(names: &[(&str, Category)]) -> KnowledgeBase {
        KnowledgeBase::from_records(names.iter().map(|&(n, c)| record(n, c)))
    }

    fn candidate(text: &str) -> Candidate {
        Candidate::new(text, text)
    }

    fn resolved_name(text: &str, kb: &KnowledgeBase) -> Option<String> {
        match resolve(&candidate(text), kb) {
            ClassificationOutcome::Matched(r) => Some(r.name),
            _ => None,
        }
    }

    #[test]
    fn exact_match_wins_immediately() {
        let kb = kb(&[("sugar", Category::Caution)]);
        assert_eq!(resolved_name("sugar", &kb).unwrap(), "sugar");
    }

    #[test]
    fn dose_fragments_are_cleaned() {
        let kb = kb(&[("calcium", Category::Safe)]);
        assert_eq!(resolved_name("calcium 10mg", &kb).unwrap(), "calcium");
    }

    #[test]
    fn compound_falls_back_to_head_noun() {
        let kb = kb(&[("salt", Category::Caution)]);
        assert_eq!(resolved_name("rock salt", &kb).unwrap(), "salt");
    }

    #[test]
    fn nutrient_prefix_resolves_to_leading_word() {
        let kb = kb(&[("vitamin d", Category::Caution), ("vitamin", Category::Safe)]);
        // Head noun ("supplement") fails first, then the nutrient
        // prefix tier resolves the leading word.
        assert_eq!(resolved_name("vitamin b6 supplement", &kb).unwrap(), "vitamin");
    }

    #[test]
    fn danger_substring_beats_closer_caution_match() {
        let kb = kb(&[("dye", Category::Caution), ("red dye", Category::Danger)]);
        assert_eq!(resolved_name("red dye extract", &kb).unwrap(), "red dye");
    }

    #[test]
    fn substring_tie_break_prefers_closest_length() {
        let kb = kb(&[
            ("sunflower oil", Category::Caution),
            ("corn oil", Category::Caution),
        ]);
        // Both names contain "oil"; "corn oil" is closer in length.
        assert_eq!(resolved_name("oil", &kb).unwrap(), "corn oil");
    }

    #[test]
    fn per_word_decomposition_is_the_last_resort() {
        // "whole wheat" is not a substring of the whole candidate, but
        // the word "wheat" is a substring of the KB name.
        let kb = kb(&[("whole wheat", Category::Safe)]);
        assert_eq!(
            resolved_name("cracked wheat cereal", &kb).unwrap(),
            "whole wheat"
        );
    }

    #[test]
    fn unresolved_candidate_reports_raw_text() {
        let kb = kb(&[("sugar", Category::Caution)]);
        let outcome = resolve(&Candidate::new("Water", "water"), &kb);
        assert_eq!(outcome, ClassificationOutcome::Unknown("Water".into()));
    }
}
