use serde::{Deserialize, Serialize};

/// Retrieval strategy selected for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Core sources only; skips graph traversal and the navigator.
    Fast,
    /// Attempts the graph navigator, falling back to multi-source retrieval.
    Standard,
    /// Full multi-source retrieval including graph traversal.
    Deep,
}

/// Apparent intent of a query, derived heuristically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    Factual,
    Synthesis,
    Exploration,
    Temporal,
    Creative,
}

/// Output of the heuristic query classifier. No model call is involved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryClassification {
    pub mode: QueryMode,
    pub intent: QueryIntent,
    /// True when the query carries temporal cues; gates the recency pass.
    pub temporal_signal: bool,
    /// Rough complexity estimate in [0, 1].
    pub complexity: f64,
}
