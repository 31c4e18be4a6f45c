//! Citation-usage extraction from generated answer text.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\[(\d+)\]").expect("static regex"))
}

/// Scan answer text for bracketed numeric markers like `[3]`.
///
/// Indices outside `[1, citation_count]` and non-numeric bracket content are
/// ignored; the result is deduplicated and ascending.
pub fn extract_used(answer: &str, citation_count: usize) -> Vec<usize> {
    let mut used: BTreeSet<usize> = BTreeSet::new();
    for capture in marker_regex().captures_iter(answer) {
        if let Ok(index) = capture[1].parse::<usize>() {
            if (1..=citation_count).contains(&index) {
                used.insert(index);
            }
        }
    }
    used.into_iter().collect()
}
