//! Heuristic query classifier: routes a query to a mode and intent without
//! any model call. Pure function of the query text; must stay cheap enough
//! to run on every request.

use trellis_core::models::{QueryClassification, QueryIntent, QueryMode};

/// Cues signalling deep multi-source analysis.
const DEEP_CUES: &[&str] = &[
    "analyze",
    "analysis",
    "compare",
    "comparison",
    "synthesize",
    "relationship between",
    "connections between",
    "how does",
    "why does",
    "in depth",
    "trace",
    "across all",
];

/// Cues signalling ordinary navigation/search.
const STANDARD_CUES: &[&str] = &[
    "find",
    "show",
    "list",
    "search",
    "look up",
    "related to",
    "which notes",
    "where is",
];

/// Cues signalling a time-anchored query.
const TEMPORAL_CUES: &[&str] = &[
    "yesterday",
    "today",
    "last week",
    "last month",
    "this week",
    "recent",
    "recently",
    "latest",
    "ago",
    "when did",
];

/// Cues signalling creative generation grounded in the knowledge base.
const CREATIVE_CUES: &[&str] = &[
    "brainstorm",
    "imagine",
    "draft",
    "write a",
    "come up with",
    "idea for",
    "ideas for",
];

/// Cues signalling cross-note synthesis.
const SYNTHESIS_CUES: &[&str] = &[
    "summarize",
    "summary",
    "combine",
    "overall",
    "overview",
    "patterns in",
    "common themes",
];

fn count_cues(query: &str, cues: &[&str]) -> usize {
    cues.iter().filter(|cue| query.contains(*cue)).count()
}

/// Classify a query. An explicit `mode_override` always wins and disables
/// the heuristics entirely (intent is still derived for observability).
pub fn classify(query: &str, mode_override: Option<QueryMode>) -> QueryClassification {
    let lower = query.to_lowercase();
    let words = lower.split_whitespace().count();

    let deep = count_cues(&lower, DEEP_CUES);
    let standard = count_cues(&lower, STANDARD_CUES);
    let temporal = count_cues(&lower, TEMPORAL_CUES);
    let creative = count_cues(&lower, CREATIVE_CUES);
    let synthesis = count_cues(&lower, SYNTHESIS_CUES);

    // Intent priority: creative > temporal > synthesis > exploration > factual.
    let intent = if creative > 0 {
        QueryIntent::Creative
    } else if temporal > 0 {
        QueryIntent::Temporal
    } else if synthesis > 0 {
        QueryIntent::Synthesis
    } else if deep > 0 {
        QueryIntent::Exploration
    } else {
        QueryIntent::Factual
    };

    let total_signals = deep + standard + temporal + creative + synthesis;
    let complexity = (words as f64 / 24.0 + 0.15 * total_signals as f64).clamp(0.0, 1.0);

    let mode = if let Some(mode) = mode_override {
        mode
    } else if words <= 5 && deep == 0 && standard == 0 {
        QueryMode::Fast
    } else if deep >= 2 || (deep >= 1 && words > 12) {
        QueryMode::Deep
    } else if standard >= 1 || (words > 8 && intent != QueryIntent::Factual) {
        QueryMode::Standard
    } else {
        QueryMode::Fast
    };

    QueryClassification {
        mode,
        intent,
        temporal_signal: temporal > 0,
        complexity,
    }
}
