use serde::{Deserialize, Serialize};

use super::assembled_context::AssembledContext;
use super::classification::QueryClassification;
use super::ranked_result::RankedResult;
use super::summary::RetrievalSummary;

/// The cacheable portion of a retrieval run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedQuery {
    pub context: AssembledContext,
    pub ranked: Vec<RankedResult>,
    pub summary: RetrievalSummary,
}

/// Full result of one engine invocation.
#[derive(Debug, Clone)]
pub struct RetrievalOutcome {
    pub context: AssembledContext,
    pub ranked: Vec<RankedResult>,
    pub summary: RetrievalSummary,
    pub classification: QueryClassification,
    pub from_cache: bool,
}

impl RetrievalOutcome {
    pub fn from_cached(cached: CachedQuery, classification: QueryClassification) -> Self {
        Self {
            context: cached.context,
            ranked: cached.ranked,
            summary: cached.summary,
            classification,
            from_cache: true,
        }
    }
}
