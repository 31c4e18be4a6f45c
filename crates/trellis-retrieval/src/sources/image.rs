//! Image retrieval: tag overlap with the query, explicit links to seeds,
//! and shared tags with seeds, merged first-seen-wins.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use trellis_core::models::{RetrievalMethod, RetrievalResult, Scope, StoredEntity};
use trellis_core::traits::{EntityStore, LinkStore, StoreResult};

use super::{query_tokens, result_from_entity};

/// Fixed moderate score for images explicitly linked to a seed entity.
const LINKED_IMAGE_SCORE: f64 = 0.55;
/// Lower score for images sharing tags with a seed but not directly linked.
const SHARED_TAG_SCORE: f64 = 0.35;

/// Retrieve image candidates for the query given the semantic seed set.
///
/// Three signals, merged with first-seen-wins dedup in this order:
/// (a) query-token ↔ tag overlap, scored by matched-tag ratio;
/// (b) direct link to a seed, fixed score;
/// (c) shared tag with a seed, lower fixed score.
pub fn retrieve(
    store: &dyn EntityStore,
    links: &dyn LinkStore,
    query: &str,
    seeds: &[StoredEntity],
    scope: &Scope,
) -> StoreResult<Vec<RetrievalResult>> {
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let seed_ids: Vec<String> = seeds.iter().map(|s| s.id.clone()).collect();
    let candidates: Vec<StoredEntity> = store
        .by_tag_or_link(&seed_ids, scope)?
        .into_iter()
        .filter(|e| e.kind.is_image())
        .collect();

    let tokens = query_tokens(query);
    let seed_tags: HashSet<&str> = seeds
        .iter()
        .flat_map(|s| s.tags.iter().map(String::as_str))
        .collect();
    let linked = linked_ids(links, &seed_ids, scope);

    let mut merged: HashMap<String, RetrievalResult> = HashMap::new();

    // (a) Tag overlap with the query, proportional to the matched ratio.
    if !tokens.is_empty() {
        for candidate in &candidates {
            let matched = candidate
                .tags
                .iter()
                .filter(|t| tokens.contains(&t.to_lowercase()))
                .count();
            if matched > 0 {
                let score = (matched as f64 / tokens.len() as f64).min(1.0);
                merged
                    .entry(candidate.id.clone())
                    .or_insert_with(|| result_from_entity(candidate, score, RetrievalMethod::Image));
            }
        }
    }

    // (b) Explicitly linked to a seed.
    for candidate in &candidates {
        if linked.contains(&candidate.id) {
            merged.entry(candidate.id.clone()).or_insert_with(|| {
                result_from_entity(candidate, LINKED_IMAGE_SCORE, RetrievalMethod::Image)
            });
        }
    }

    // (c) Shares a tag with a seed but is not directly linked.
    for candidate in &candidates {
        if candidate.tags.iter().any(|t| seed_tags.contains(t.as_str())) {
            merged.entry(candidate.id.clone()).or_insert_with(|| {
                result_from_entity(candidate, SHARED_TAG_SCORE, RetrievalMethod::Image)
            });
        }
    }

    let mut results: Vec<RetrievalResult> = merged.into_values().collect();
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.source_id.cmp(&b.source_id))
    });
    Ok(results)
}

/// Ids linked to or from any seed. A failed link query for one seed is
/// logged and contributes nothing.
fn linked_ids(links: &dyn LinkStore, seed_ids: &[String], scope: &Scope) -> HashSet<String> {
    let mut ids = HashSet::new();
    for seed_id in seed_ids {
        match links.outgoing_links(seed_id, scope) {
            Ok(rows) => ids.extend(rows.into_iter().map(|r| r.to_id)),
            Err(e) => warn!(id = %seed_id, error = %e, "outgoing link query failed"),
        }
        match links.incoming_links(seed_id, scope) {
            Ok(rows) => ids.extend(rows.into_iter().map(|r| r.from_id)),
            Err(e) => warn!(id = %seed_id, error = %e, "incoming link query failed"),
        }
    }
    ids
}
