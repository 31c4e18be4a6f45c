use serde::{Deserialize, Serialize};

use super::relationship::RelationshipLink;
use super::retrieval_method::RetrievalMethod;
use super::source_kind::SourceKind;

/// A source included in assembled context, addressable by bracket marker.
///
/// `index` is the 1-based citation number generated answers refer to, e.g.
/// `[3]`. Indices are unique and ascending within one assembled context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationSource {
    pub index: usize,
    pub kind: SourceKind,
    pub source_id: String,
    pub title: String,
    /// The (possibly truncated) content actually included in the context.
    pub content: String,
    pub relevance_score: f64,
    pub retrieval_method: RetrievalMethod,
    pub hop_count: u32,
    pub relationship_chain: Vec<RelationshipLink>,
}
