use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::retrieval_method::RetrievalMethod;

/// Observability summary for one retrieval run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalSummary {
    /// Number of retrieval sources dispatched (including failed ones).
    pub total_sources_searched: usize,
    /// Number of results that survived the full pipeline.
    pub sources_used: usize,
    /// Methods that contributed at least one surviving result, in execution order.
    pub methods_used: Vec<RetrievalMethod>,
    /// Mean final relevance over surviving results; 0.0 when empty.
    pub avg_relevance_score: f64,
    /// Surviving result count per source-kind label.
    pub source_type_breakdown: BTreeMap<String, usize>,
}
