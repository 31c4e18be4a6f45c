//! Independent retrieval sources. Each produces `Vec<RetrievalResult>` from
//! read-only store queries and has no other side effects; store errors are
//! surfaced to the engine, which degrades that source to an empty
//! contribution without aborting its siblings.

pub mod graph;
pub mod image;
pub mod lexical;
pub mod semantic;
pub mod title;

use trellis_core::constants::{STOPWORDS, TITLE_TOKEN_MIN_LEN};
use trellis_core::models::{RetrievalMethod, RetrievalResult, StoredEntity};

/// Convert a stored entity into a retrieval result for the given method.
pub(crate) fn result_from_entity(
    entity: &StoredEntity,
    similarity: f64,
    method: RetrievalMethod,
) -> RetrievalResult {
    let mut result = RetrievalResult::new(
        entity.kind.clone(),
        entity.id.clone(),
        entity.title.clone(),
        entity.content.clone(),
        similarity,
        method,
    );
    result.created_at = entity.created_at;
    result
}

/// Lowercase query tokens of at least `TITLE_TOKEN_MIN_LEN` characters,
/// stopword-filtered. Shared by title matching and image tag overlap.
pub(crate) fn query_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= TITLE_TOKEN_MIN_LEN && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}
