//! Full-text search with rank-based relevance.
//!
//! Lexical scoring is an opaque rank signal: the store returns hits
//! best-first and we map list position into the same [0, 1]-ish range as
//! cosine similarity so display scores are comparable. Fusion itself only
//! uses positions, never these values.

use trellis_core::config::RetrievalConfig;
use trellis_core::models::{RetrievalMethod, RetrievalResult, Scope};
use trellis_core::traits::{EntityStore, StoreResult};

use super::result_from_entity;

/// Run a lexical query and normalize rank positions into display scores.
pub fn search(
    store: &dyn EntityStore,
    query: &str,
    scope: &Scope,
    config: &RetrievalConfig,
) -> StoreResult<Vec<RetrievalResult>> {
    let rows = store.lexical_query(query, scope, config.source_limit)?;
    let total = rows.len();
    Ok(rows
        .iter()
        .enumerate()
        .map(|(position, entity)| {
            // Distance from the tail, so earlier hits score higher:
            // min(1, rank/10 + 0.3) with rank = total - position.
            let rank = (total - position) as f64;
            let score = (rank / 10.0 + 0.3).min(1.0);
            result_from_entity(entity, score, RetrievalMethod::Lexical)
        })
        .collect())
}
