//! Locate the ingredient-list substring inside raw label text.

/// Markers that open an ingredient section, in priority order.
/// Priority only breaks ties between markers found at the same index
/// (so `"ingredients:"` beats `"ingredients"` and consumes the colon);
/// otherwise the earliest textual occurrence wins.
const START_MARKERS: &[&str] = &[
    "ingredients:",
    "ingredients list:",
    "ingredients list",
    "ingredients",
    "contains:",
    "made with:",
    "made from:",
    "made with",
    "made from",
];

/// Markers that close an ingredient section.
const END_MARKERS: &[&str] = &[
    "nutrition facts",
    "nutrition information",
    "nutritional",
    "allergen information",
    "allergens",
    "may contain",
    "warning",
    "storage",
    "best before",
    "expiry",
    "manufactured by",
    "distributed by",
];

/// Extract the ingredient-bearing substring, lowercased and trimmed.
///
/// Returns `None` when no start marker is present; the caller then
/// falls back to whole-text scanning against the knowledge base.
pub fn segment(raw_text: &str) -> Option<String> {
    let lower = raw_text.to_lowercase();

    let mut start: Option<(usize, &str)> = None;
    for marker in START_MARKERS.iter().copied() {
        if let Some(idx) = lower.find(marker) {
            match start {
                Some((best_idx, _)) if best_idx <= idx => {}
                _ => start = Some((idx, marker)),
            }
        }
    }
    let (idx, marker) = start?;
    let begin = idx + marker.len();

    let mut end = lower.len();
    for marker in END_MARKERS {
        if let Some(offset) = lower[begin..].find(marker) {
            end = end.min(begin + offset);
        }
    }

    Some(lower[begin..end].trim().to_string())
}
