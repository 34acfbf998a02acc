//! Pipeline driver: segment → tokenize → match → aggregate.

use tracing::debug;

use nutriscan_core::{AnalysisSummary, Candidate, ClassificationOutcome};
use nutriscan_kb::KnowledgeBase;

use crate::aggregate::summarize;
use crate::heuristics;
use crate::matcher;
use crate::product::extract_product_name;
use crate::segment::segment;
use crate::token::{tokenize, tokenize_fallback};

/// Analyze one piece of raw OCR text against a knowledge-base snapshot.
///
/// Deterministic for a given `(raw_text, kb)` pair and total over its
/// input domain — there is no failure exit path. Candidates that resist
/// both the matcher and the heuristics come back as unknowns, never
/// dropped.
pub fn analyze(raw_text: &str, kb: &KnowledgeBase) -> AnalysisSummary {
    let product_name = extract_product_name(raw_text);

    let candidates = match segment(raw_text) {
        Some(section) => tokenize(&section),
        None => {
            debug!("no ingredient section marker, scanning whole text against the KB");
            tokenize_fallback(raw_text, kb)
        }
    };

    if candidates.is_empty() {
        return AnalysisSummary::empty(product_name);
    }

    let outcomes: Vec<ClassificationOutcome> = candidates
        .iter()
        .map(|candidate| classify_candidate(candidate, kb))
        .collect();

    summarize(outcomes, product_name)
}

fn classify_candidate(candidate: &Candidate, kb: &KnowledgeBase) -> ClassificationOutcome {
    match matcher::resolve(candidate, kb) {
        ClassificationOutcome::Unknown(raw) => match heuristics::classify(&raw) {
            Some(outcome) => {
                debug!(candidate = %raw, "resolved by lexical heuristics");
                outcome
            }
            None => {
                debug!(candidate = %raw, "unresolved candidate");
                ClassificationOutcome::Unknown(raw)
            }
        },
        outcome => outcome,
    }
}
