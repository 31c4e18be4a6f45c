//! Deterministic execution of a validated navigation plan.
//!
//! Scoring is fixed-weight and pure: region membership seeds 0.4, selected
//! tags add 0.3 (or seed new entities at 0.3), keyword presence adds 0.3 for
//! title matches and 0.1 for body matches, and a single outgoing-link hop
//! from the top 5 adds neighbors at 0.6 × the parent score.

use std::collections::HashMap;

use tracing::warn;

use trellis_core::models::{
    NavigationPlan, RetrievalMethod, RetrievalResult, Scope, StoredEntity,
};
use trellis_core::traits::{EntityStore, LinkStore};

use crate::sources::query_tokens;

const REGION_SEED_SCORE: f64 = 0.4;
const TAG_BOOST: f64 = 0.3;
const TAG_SEED_SCORE: f64 = 0.3;
const TITLE_KEYWORD_SCORE: f64 = 0.3;
const BODY_KEYWORD_SCORE: f64 = 0.1;
const HOP_DAMPING: f64 = 0.6;
const HOP_SOURCES: usize = 5;

/// Execute the plan against the stores. Pure function of plan + store state.
pub fn execute(
    store: &dyn EntityStore,
    links: &dyn LinkStore,
    plan: &NavigationPlan,
    query: &str,
    scope: &Scope,
    max_results: usize,
) -> Vec<RetrievalResult> {
    let mut candidates: HashMap<String, (StoredEntity, f64)> = HashMap::new();

    // Region membership seeds.
    for region_id in &plan.region_ids {
        match store.entities_in_region(region_id, scope) {
            Ok(entities) => {
                for entity in entities {
                    candidates
                        .entry(entity.id.clone())
                        .or_insert((entity, REGION_SEED_SCORE));
                }
            }
            Err(e) => warn!(region = %region_id, error = %e, "region query failed"),
        }
    }

    // Tag boosts; unseen tagged entities become new seeds.
    if !plan.tags.is_empty() {
        match store.entities_by_tags(&plan.tags, scope) {
            Ok(entities) => {
                for entity in entities {
                    candidates
                        .entry(entity.id.clone())
                        .and_modify(|(_, score)| *score += TAG_BOOST)
                        .or_insert((entity, TAG_SEED_SCORE));
                }
            }
            Err(e) => warn!(error = %e, "tag query failed"),
        }
    }

    // Keyword scoring: plan keywords plus the first three query tokens.
    let mut keywords: Vec<String> = plan.keywords.iter().map(|k| k.to_lowercase()).collect();
    keywords.extend(query_tokens(query).into_iter().take(3));
    // A keyword reachable both ways must still count once.
    keywords.sort_unstable();
    keywords.dedup();
    for (entity, score) in candidates.values_mut() {
        let title = entity.title.to_lowercase();
        let body = entity.content.to_lowercase();
        for keyword in &keywords {
            if title.contains(keyword.as_str()) {
                *score += TITLE_KEYWORD_SCORE;
            } else if body.contains(keyword.as_str()) {
                *score += BODY_KEYWORD_SCORE;
            }
        }
    }

    // One outgoing hop from the strongest candidates.
    let mut scored: Vec<(String, f64)> = candidates
        .iter()
        .map(|(id, (_, score))| (id.clone(), *score))
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    for (parent_id, parent_score) in scored.into_iter().take(HOP_SOURCES) {
        let rows = match links.outgoing_links(&parent_id, scope) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(id = %parent_id, error = %e, "link query failed during navigation");
                continue;
            }
        };
        for row in rows {
            if candidates.contains_key(&row.to_id) {
                continue;
            }
            match store.fetch_by_id(&row.to_id, scope) {
                Ok(Some(entity)) => {
                    candidates.insert(entity.id.clone(), (entity, parent_score * HOP_DAMPING));
                }
                Ok(None) => {}
                Err(e) => warn!(id = %row.to_id, error = %e, "entity fetch failed"),
            }
        }
    }

    let mut results: Vec<RetrievalResult> = candidates
        .into_values()
        .map(|(entity, score)| {
            crate::sources::result_from_entity(&entity, score, RetrievalMethod::Navigator)
        })
        .collect();
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.source_id.cmp(&b.source_id))
    });
    results.truncate(max_results);
    results
}
