use crate::errors::StoreError;
use crate::models::{LinkRow, RegionSummary, Scope, StoredEntity, TagSummary};

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only entity store: notes, note chunks, images, document chunks.
///
/// Implementations own persistence and any caller-supplied timeouts; this
/// core treats every method as a fallible black box and degrades per-source
/// on error.
pub trait EntityStore: Send + Sync {
    /// Entity-level cosine-similarity lookup against a query vector.
    fn similarity_query(
        &self,
        vector: &[f32],
        scope: &Scope,
        threshold: f64,
        limit: usize,
    ) -> StoreResult<Vec<(StoredEntity, f64)>>;

    /// Chunk-level cosine-similarity lookup.
    fn chunk_similarity_query(
        &self,
        vector: &[f32],
        scope: &Scope,
        threshold: f64,
        limit: usize,
    ) -> StoreResult<Vec<(StoredEntity, f64)>>;

    /// Full-text search; relevance is the position in the returned list.
    fn lexical_query(
        &self,
        text: &str,
        scope: &Scope,
        limit: usize,
    ) -> StoreResult<Vec<StoredEntity>>;

    /// Entities sharing a tag with, or explicitly linked to, any of `ids`.
    fn by_tag_or_link(&self, ids: &[String], scope: &Scope) -> StoreResult<Vec<StoredEntity>>;

    fn fetch_by_id(&self, id: &str, scope: &Scope) -> StoreResult<Option<StoredEntity>>;

    /// Entities whose titles contain any of the given lowercase tokens
    /// (case-insensitive substring match).
    fn title_search(
        &self,
        tokens: &[String],
        scope: &Scope,
        limit: usize,
    ) -> StoreResult<Vec<StoredEntity>>;

    /// Entities carrying any of the given tags (navigator execution).
    fn entities_by_tags(&self, tags: &[String], scope: &Scope) -> StoreResult<Vec<StoredEntity>>;

    /// Entities belonging to a graph region (navigator execution).
    fn entities_in_region(&self, region_id: &str, scope: &Scope)
        -> StoreResult<Vec<StoredEntity>>;

    /// Compact region descriptions (navigator prompt).
    fn region_summaries(&self, scope: &Scope) -> StoreResult<Vec<RegionSummary>>;

    /// Tags with usage counts (navigator prompt).
    fn tag_summaries(&self, scope: &Scope) -> StoreResult<Vec<TagSummary>>;
}

/// Read-only link-graph store.
pub trait LinkStore: Send + Sync {
    fn outgoing_links(&self, entity_id: &str, scope: &Scope) -> StoreResult<Vec<LinkRow>>;

    fn incoming_links(&self, entity_id: &str, scope: &Scope) -> StoreResult<Vec<LinkRow>>;
}
