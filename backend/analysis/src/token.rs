//! Split an ingredient segment into normalized candidates.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use nutriscan_core::Candidate;
use nutriscan_kb::KnowledgeBase;

/// Separator strategies, tried in priority order. Exactly one strategy
/// is chosen — the first whose separator appears in the segment — and
/// strategies are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Comma,
    Period,
    Semicolon,
    And,
    Newline,
    Bracket,
    Space,
}

const SEPARATOR_PRIORITY: &[Separator] = &[
    Separator::Comma,
    Separator::Period,
    Separator::Semicolon,
    Separator::And,
    Separator::Newline,
    Separator::Bracket,
    Separator::Space,
];

impl Separator {
    fn is_present(self, text: &str) -> bool {
        match self {
            Separator::Comma => text.contains(','),
            Separator::Period => text.contains('.'),
            Separator::Semicolon => text.contains(';'),
            Separator::And => text.contains(" and "),
            Separator::Newline => text.contains('\n'),
            Separator::Bracket => text.contains(['(', ')', '[', ']']),
            Separator::Space => text.contains(' '),
        }
    }

    fn split<'a>(self, text: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Comma => text.split(',').collect(),
            Separator::Period => text.split('.').collect(),
            Separator::Semicolon => text.split(';').collect(),
            Separator::And => text.split(" and ").collect(),
            Separator::Newline => text.split('\n').collect(),
            Separator::Bracket => text.split(['(', ')', '[', ']']).collect(),
            Separator::Space => text.split(' ').collect(),
        }
    }
}

/// Words that survive splitting but are never ingredients.
const STOP_WORDS: &[&str] = &[
    "and", "contains", "may", "or", "the", "a", "an", "of", "with", "from", "in",
    "for", "to", "by", "as", "on", "at", "content", "free", "daily", "value",
    "per", "serving", "percent", "amount", "total", "source", "mg", "g", "ml",
    "oz", "lb", "nutrition", "facts", "information",
];

static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+%").unwrap());
static PAREN_ASIDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

/// Tokenize an explicit ingredient segment into candidates.
///
/// Every emitted candidate has a non-empty normalized text of length
/// at least two.
pub fn tokenize(segment: &str) -> Vec<Candidate> {
    let separator = SEPARATOR_PRIORITY
        .iter()
        .copied()
        .find(|s| s.is_present(segment))
        .unwrap_or(Separator::Space);

    let mut candidates = Vec::new();
    for piece in separator.split(segment) {
        let raw = piece.trim();
        if raw.is_empty() {
            continue;
        }
        if let Some(normalized) = normalize_piece(raw) {
            candidates.push(Candidate::new(raw, normalized));
        }
    }
    candidates
}

/// Clean one raw piece into lookup form, or reject it.
fn normalize_piece(piece: &str) -> Option<String> {
    let lower = piece.to_lowercase();
    let no_percent = PERCENT_RE.replace_all(&lower, "");
    let no_aside = PAREN_ASIDE_RE.replace_all(&no_percent, "");
    // An unmatched open paren means the aside ran past this piece.
    let truncated = match no_aside.find('(') {
        Some(i) => &no_aside[..i],
        None => no_aside.as_ref(),
    };
    let cleaned = PUNCT_RE.replace_all(truncated, "");
    let normalized = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if normalized.len() < 2 {
        return None;
    }
    if STOP_WORDS.contains(&normalized.as_str()) {
        return None;
    }
    Some(normalized)
}

/// Whole-text scan used when no ingredient section marker was found.
///
/// Slides 1–3 word windows over the text and keeps windows that exactly
/// equal a knowledge-base name. Without a section boundary to trust,
/// this mode only recovers ingredients the KB already knows. Emission
/// follows first occurrence; duplicates are suppressed.
pub fn tokenize_fallback(raw_text: &str, kb: &KnowledgeBase) -> Vec<Candidate> {
    let lower = raw_text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| {
            c.is_whitespace() || matches!(c, ',' | '.' | ':' | ';' | '(' | ')' | '[' | ']')
        })
        .filter(|w| !w.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for i in 0..words.len() {
        let max_window = 3.min(words.len() - i);
        for n in 1..=max_window {
            let window = words[i..i + n].join(" ");
            if kb.contains(&window) && seen.insert(window.clone()) {
                candidates.push(Candidate::new(window.clone(), window));
            }
        }
    }
    candidates
}
