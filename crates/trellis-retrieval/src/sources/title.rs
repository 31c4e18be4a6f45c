//! Direct title matching: a small number of very-high-confidence hits.

use trellis_core::constants::TITLE_MATCH_LIMIT;
use trellis_core::models::{RetrievalMethod, RetrievalResult, Scope};
use trellis_core::traits::{EntityStore, StoreResult};

use super::{query_tokens, result_from_entity};

/// Display score for a direct title hit.
const TITLE_MATCH_SCORE: f64 = 0.95;

/// Case-insensitive substring match on title tokens (≥ 3 chars, stopwords
/// removed). Shorter titles are more specific, so hits are ordered by title
/// length ascending.
pub fn search(
    store: &dyn EntityStore,
    query: &str,
    scope: &Scope,
) -> StoreResult<Vec<RetrievalResult>> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows = store.title_search(&tokens, scope, TITLE_MATCH_LIMIT * 4)?;
    rows.sort_by(|a, b| {
        a.title
            .len()
            .cmp(&b.title.len())
            .then_with(|| a.id.cmp(&b.id))
    });
    rows.truncate(TITLE_MATCH_LIMIT);

    Ok(rows
        .iter()
        .map(|entity| result_from_entity(entity, TITLE_MATCH_SCORE, RetrievalMethod::TitleMatch))
        .collect())
}
