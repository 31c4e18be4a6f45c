//! Semantic similarity search at entity and chunk granularity.
//!
//! Entity-level search uses a lower threshold than chunk-level because
//! whole-entity embeddings dilute specificity; chunk hits get a fixed boost
//! reflecting their higher precision.

use trellis_core::config::RetrievalConfig;
use trellis_core::models::{RetrievalMethod, RetrievalResult, Scope};
use trellis_core::traits::{EntityStore, StoreResult};

use super::result_from_entity;

/// Entity-level cosine-similarity search.
pub fn entity_level(
    store: &dyn EntityStore,
    vector: &[f32],
    scope: &Scope,
    config: &RetrievalConfig,
) -> StoreResult<Vec<RetrievalResult>> {
    let rows = store.similarity_query(
        vector,
        scope,
        config.entity_similarity_threshold,
        config.source_limit,
    )?;
    Ok(rows
        .iter()
        .map(|(entity, similarity)| {
            result_from_entity(entity, *similarity, RetrievalMethod::Semantic)
        })
        .collect())
}

/// Chunk-level cosine-similarity search, boosted and capped at 1.0.
pub fn chunk_level(
    store: &dyn EntityStore,
    vector: &[f32],
    scope: &Scope,
    config: &RetrievalConfig,
) -> StoreResult<Vec<RetrievalResult>> {
    let rows = store.chunk_similarity_query(
        vector,
        scope,
        config.chunk_similarity_threshold,
        config.source_limit,
    )?;
    Ok(rows
        .iter()
        .map(|(entity, similarity)| {
            let boosted = (similarity * config.chunk_boost).min(1.0);
            result_from_entity(entity, boosted, RetrievalMethod::ChunkSemantic)
        })
        .collect())
}
