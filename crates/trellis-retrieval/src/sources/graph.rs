//! Link-graph BFS from seed entities.
//!
//! Scores decay geometrically with hop distance. Every traversed edge is
//! appended to a relationship chain carried forward for explainability. A
//! failed link or entity fetch is logged and treated as "no neighbors"; it
//! never aborts the remaining traversal, so this source is infallible.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use trellis_core::config::GraphTraversalConfig;
use trellis_core::models::{
    LinkDirection, RelationshipLink, RetrievalMethod, RetrievalResult, Scope, StoredEntity,
};
use trellis_core::traits::{EntityStore, LinkStore};

struct QueueItem {
    id: String,
    hop: u32,
    chain: Vec<RelationshipLink>,
}

/// Breadth-first traversal of the link graph starting at `seeds`.
pub fn traverse(
    store: &dyn EntityStore,
    links: &dyn LinkStore,
    seeds: &[StoredEntity],
    scope: &Scope,
    config: &GraphTraversalConfig,
) -> Vec<RetrievalResult> {
    if seeds.is_empty() {
        return Vec::new();
    }

    let decay = config.effective_decay();
    let per_hop_cap = config.max_results_per_hop * seeds.len();

    // Seeding the visited set with the start entities avoids revisits.
    let mut visited: HashSet<String> = seeds.iter().map(|s| s.id.clone()).collect();
    let mut queue: VecDeque<QueueItem> = seeds
        .iter()
        .map(|s| QueueItem {
            id: s.id.clone(),
            hop: 0,
            chain: Vec::new(),
        })
        .collect();

    let mut emitted_per_hop: HashMap<u32, usize> = HashMap::new();
    let mut results = Vec::new();

    while let Some(item) = queue.pop_front() {
        if item.hop >= config.max_hops {
            continue;
        }

        for edge in neighbors(links, &item.id, scope, config) {
            let neighbor_id = match edge.direction {
                LinkDirection::Forward => edge.to_id.clone(),
                LinkDirection::Back => edge.from_id.clone(),
            };
            if !visited.insert(neighbor_id.clone()) {
                continue;
            }

            let hop = item.hop + 1;
            let emitted = emitted_per_hop.entry(hop).or_insert(0);
            if *emitted >= per_hop_cap {
                continue;
            }

            let entity = match store.fetch_by_id(&neighbor_id, scope) {
                Ok(Some(entity)) => entity,
                Ok(None) => {
                    debug!(id = %neighbor_id, "linked entity missing, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(id = %neighbor_id, error = %e, "entity fetch failed during traversal");
                    continue;
                }
            };
            *emitted += 1;

            let mut chain = item.chain.clone();
            chain.push(edge);

            let mut result = super::result_from_entity(
                &entity,
                decay.powi(hop as i32),
                RetrievalMethod::Graph,
            );
            result.hop_count = hop;
            result.relationship_chain = chain.clone();
            results.push(result);

            if hop < config.max_hops {
                queue.push_back(QueueItem {
                    id: neighbor_id,
                    hop,
                    chain,
                });
            }
        }
    }

    results
}

/// Edges adjacent to `id`, forward first, then backlinks when configured.
/// A failed link query is logged and yields no neighbors for that direction.
fn neighbors(
    links: &dyn LinkStore,
    id: &str,
    scope: &Scope,
    config: &GraphTraversalConfig,
) -> Vec<RelationshipLink> {
    let mut edges = Vec::new();

    match links.outgoing_links(id, scope) {
        Ok(rows) => edges.extend(rows.into_iter().map(|row| RelationshipLink {
            direction: LinkDirection::Forward,
            from_id: row.from_id,
            to_id: row.to_id,
            from_title: row.from_title,
            to_title: row.to_title,
        })),
        Err(e) => warn!(id = %id, error = %e, "outgoing link query failed"),
    }

    if config.include_backlinks {
        match links.incoming_links(id, scope) {
            Ok(rows) => edges.extend(rows.into_iter().map(|row| RelationshipLink {
                direction: LinkDirection::Back,
                from_id: row.from_id,
                to_id: row.to_id,
                from_title: row.from_title,
                to_title: row.to_title,
            })),
            Err(e) => warn!(id = %id, error = %e, "incoming link query failed"),
        }
    }

    edges
}
