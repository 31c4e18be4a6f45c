use serde::{Deserialize, Serialize};

/// Closed set of retrieval methods contributing to fusion.
///
/// Adding a method is a deliberate registration: it must be given a weight in
/// [`crate::config::FusionWeights`] (or it falls back to the documented
/// default) and a position in the fixed execution order below, which doubles
/// as the deterministic tie-break for equal fused scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMethod {
    /// Entity-level cosine similarity.
    Semantic,
    /// Chunk-level cosine similarity.
    ChunkSemantic,
    /// Full-text search, rank-normalized.
    Lexical,
    /// Direct case-insensitive title match.
    TitleMatch,
    /// Tag/link-based image matching.
    Image,
    /// Link-graph BFS from seed entities.
    Graph,
    /// Plan-then-execute graph navigation.
    Navigator,
}

impl RetrievalMethod {
    /// Fixed execution-order index. Declaration order is execution order;
    /// completion order of concurrent sources never affects ranking.
    pub fn order(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            RetrievalMethod::Semantic => "semantic",
            RetrievalMethod::ChunkSemantic => "chunk_semantic",
            RetrievalMethod::Lexical => "lexical",
            RetrievalMethod::TitleMatch => "title_match",
            RetrievalMethod::Image => "image",
            RetrievalMethod::Graph => "graph",
            RetrievalMethod::Navigator => "navigator",
        }
    }
}
