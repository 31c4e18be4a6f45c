use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::relationship::RelationshipLink;
use super::retrieval_method::RetrievalMethod;
use super::source_kind::SourceKind;

/// One candidate produced by a single retrieval source.
///
/// Ephemeral: created per source call, owned by the query execution, and
/// consumed by fusion. `similarity` is the source's own normalized relevance
/// in [0, 1]; scores are only comparable across sources after RRF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub kind: SourceKind,
    pub source_id: String,
    pub title: String,
    pub content: String,
    /// Normalized relevance within the producing method, clamped to [0, 1].
    pub similarity: f64,
    pub method: RetrievalMethod,
    /// Creation timestamp when the store knows it; drives the recency pass.
    pub created_at: Option<DateTime<Utc>>,
    /// Graph distance from the seed set; 0 for non-graph results.
    pub hop_count: u32,
    /// Traversed edges explaining how a graph result was reached.
    pub relationship_chain: Vec<RelationshipLink>,
}

impl RetrievalResult {
    /// Build a result with no graph provenance.
    pub fn new(
        kind: SourceKind,
        source_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        similarity: f64,
        method: RetrievalMethod,
    ) -> Self {
        Self {
            kind,
            source_id: source_id.into(),
            title: title.into(),
            content: content.into(),
            similarity: similarity.clamp(0.0, 1.0),
            method,
            created_at: None,
            hop_count: 0,
            relationship_chain: Vec::new(),
        }
    }

    /// Identity key for fusion and dedup: one survivor per (kind, id).
    pub fn key(&self) -> (&'static str, &str) {
        (self.kind.label(), &self.source_id)
    }
}
