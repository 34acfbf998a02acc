//! Lexical rule engine for candidates the knowledge base cannot place.
//!
//! Rule groups run in fixed order — nutrient → known-safe → danger →
//! caution — and the first matching group wins. Each hit produces a
//! synthetic record carrying a generic impact line for its category.

use once_cell::sync::Lazy;
use regex::Regex;

use nutriscan_core::{Category, ClassificationOutcome, IngredientRecord};

// --- Group 1: nutrients and minerals ---

const NUTRIENT_PREFIXES: &[&str] =
    &["vitamin", "calcium", "iron", "potassium", "zinc", "magnesium"];

/// Bare dose entries like "niacin 20mg".
static DOSE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[a-z]*\s*\d+\s*mg\s*$").unwrap());

// --- Group 2: known-safe natural ingredients ---

const KNOWN_SAFE: &[&str] = &[
    "dried potatoes",
    "potatoes",
    "sea salt",
    "corn starch",
    "starch",
    "banana",
    "raw banana",
    "himalayan pink salt",
];

static NATURAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^natural\s+[a-z\s]+$").unwrap());

// --- Group 3: danger patterns ---

const DANGER_SUBSTRINGS: &[&str] = &[
    "hydrogenated",
    "trans fat",
    "high fructose",
    "artificial color",
    "artificial flavor",
    "msg",
    "sodium nitrate",
    "sodium nitrite",
];

static NUMBERED_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:red|yellow|blue)\s*(?:\d+|#)").unwrap());
static ARTIFICIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"artificial\s+[a-z]+").unwrap());
static FOOD_COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"food\s+colou?r").unwrap());

// --- Group 4: caution patterns ---

const CAUTION_SUBSTRINGS: &[&str] = &[
    "sugar", "syrup", "sweetener", "oil", "fat", "flavor", "corn", "starch",
    "dextrose", "annatto", "lecithin", "soy",
];

static DYE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdyes?\b").unwrap());
static COLORING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"colou?rings?\b").unwrap());
static EXTRACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+\s+extracts?$").unwrap());

/// Categorize a candidate by lexical shape alone.
///
/// Returns `None` when no rule group matches, in which case the
/// matcher's `Unknown` outcome stands.
pub fn classify(raw_text: &str) -> Option<ClassificationOutcome> {
    let text = raw_text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if is_nutrient(&text) {
        return Some(synthetic(
            &text,
            Category::Safe,
            "Essential nutrient or mineral",
            "Necessary for proper body function and health.",
        ));
    }

    if is_known_safe(&text) {
        return Some(synthetic(
            &text,
            Category::Safe,
            "Generally recognized as safe",
            "Minimal processing and generally considered safe for consumption.",
        ));
    }

    if is_danger(&text) {
        return Some(synthetic(
            &text,
            Category::Danger,
            "Potentially harmful ingredient",
            "This ingredient may have negative health effects. Consider alternatives.",
        ));
    }

    if is_caution(&text) {
        return Some(synthetic(
            &text,
            Category::Caution,
            "Use in moderation",
            "This ingredient may be acceptable in moderation but could have health impacts in excess.",
        ));
    }

    None
}

fn is_nutrient(text: &str) -> bool {
    NUTRIENT_PREFIXES.iter().any(|p| text.starts_with(p)) || DOSE_SHAPE_RE.is_match(text)
}

fn is_known_safe(text: &str) -> bool {
    KNOWN_SAFE.contains(&text) || NATURAL_RE.is_match(text)
}

fn is_danger(text: &str) -> bool {
    DANGER_SUBSTRINGS.iter().any(|p| text.contains(p))
        || NUMBERED_COLOR_RE.is_match(text)
        || ARTIFICIAL_RE.is_match(text)
        || FOOD_COLOR_RE.is_match(text)
}

fn is_caution(text: &str) -> bool {
    CAUTION_SUBSTRINGS.iter().any(|p| text.contains(p))
        || DYE_RE.is_match(text)
        || COLORING_RE.is_match(text)
        || EXTRACT_RE.is_match(text)
}

fn synthetic(
    name: &str,
    category: Category,
    impact: &str,
    description: &str,
) -> ClassificationOutcome {
    ClassificationOutcome::HeuristicMatch(IngredientRecord {
        name: name.to_string(),
        impact: impact.to_string(),
        category,
        description: Some(description.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(text: &str) -> Option<Category> {
        classify(text).and_then(|o| o.record().map(|r| r.category))
    }

    #[test]
    fn nutrients_are_safe() {
        assert_eq!(category_of("vitamin b12"), Some(Category::Safe));
        assert_eq!(category_of("zinc oxide"), Some(Category::Safe));
        assert_eq!(category_of("niacin 20mg"), Some(Category::Safe));
    }

    #[test]
    fn known_safe_naturals_beat_the_caution_starch_rule() {
        // "corn starch" would hit the caution substrings if the groups
        // ran in the other order.
        assert_eq!(category_of("corn starch"), Some(Category::Safe));
        assert_eq!(category_of("natural rosemary extract"), Some(Category::Safe));
    }

    #[test]
    fn danger_patterns() {
        assert_eq!(category_of("high fructose corn syrup"), Some(Category::Danger));
        assert_eq!(category_of("partially hydrogenated soybean oil"), Some(Category::Danger));
        assert_eq!(category_of("red 40"), Some(Category::Danger));
        assert_eq!(category_of("blue #1"), Some(Category::Danger));
        assert_eq!(category_of("artificial vanilla"), Some(Category::Danger));
        assert_eq!(category_of("food colouring agent"), Some(Category::Danger));
    }

    #[test]
    fn danger_wins_over_caution_overlap() {
        // Contains both "syrup" (caution) and "high fructose" (danger).
        assert_eq!(category_of("high fructose syrup"), Some(Category::Danger));
    }

    #[test]
    fn caution_patterns() {
        assert_eq!(category_of("brown sugar"), Some(Category::Caution));
        assert_eq!(category_of("soybean paste"), Some(Category::Caution));
        assert_eq!(category_of("yeast extract"), Some(Category::Caution));
        assert_eq!(category_of("red dye"), Some(Category::Caution));
    }

    #[test]
    fn unmatched_text_stays_unknown() {
        assert_eq!(classify("water"), None);
        assert_eq!(classify("wheat"), None);
        assert_eq!(classify(""), None);
    }
}
