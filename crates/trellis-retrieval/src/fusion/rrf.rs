//! Weighted Reciprocal Rank Fusion: contribution = w_m / (k + rank + 1).
//!
//! Combines per-method ranked lists into one ordering without normalizing
//! scores across methods. Placement depends only on list positions and the
//! summed contributions, with a stable tie-break on fixed method execution
//! order, so concurrent source completion order can never affect output.

use std::collections::BTreeMap;
use std::collections::HashMap;

use trellis_core::config::FusionWeights;
use trellis_core::models::{reassign_ranks, RankedResult, RetrievalMethod, RetrievalResult};

struct Accumulator {
    best: RetrievalResult,
    method_scores: BTreeMap<RetrievalMethod, f64>,
}

/// Fuse per-method result lists. `method_lists` must be in fixed execution
/// order; each inner list is that method's own ranking, best first.
pub fn fuse(
    method_lists: &[(RetrievalMethod, Vec<RetrievalResult>)],
    weights: &FusionWeights,
    k: u32,
    max_results: usize,
) -> Vec<RankedResult> {
    let mut accumulators: HashMap<(&'static str, String), Accumulator> = HashMap::new();

    for (method, list) in method_lists {
        let weight = weights.weight(*method);
        let mut seen_in_list: Vec<(&'static str, String)> = Vec::new();
        for (rank, result) in list.iter().enumerate() {
            let key = (result.kind.label(), result.source_id.clone());
            // A method contributes at most once per entity.
            if seen_in_list.contains(&key) {
                continue;
            }
            seen_in_list.push(key.clone());

            let contribution = weight / (k as f64 + rank as f64 + 1.0);
            match accumulators.get_mut(&key) {
                Some(acc) => {
                    *acc.method_scores.entry(*method).or_insert(0.0) += contribution;
                    // Keep the display result with the highest raw similarity.
                    if result.similarity > acc.best.similarity {
                        acc.best = result.clone();
                    }
                }
                None => {
                    let mut method_scores = BTreeMap::new();
                    method_scores.insert(*method, contribution);
                    accumulators.insert(
                        key,
                        Accumulator {
                            best: result.clone(),
                            method_scores,
                        },
                    );
                }
            }
        }
    }

    let mut ranked: Vec<RankedResult> = accumulators
        .into_values()
        .map(|acc| {
            let final_score = acc.method_scores.values().sum();
            RankedResult {
                result: acc.best,
                method_scores: acc.method_scores,
                final_score,
                rank: 0,
            }
        })
        .collect();

    sort_ranked(&mut ranked);
    ranked.truncate(max_results);
    reassign_ranks(&mut ranked);
    ranked
}

/// Canonical ordering: score descending, then earliest contributing method
/// in execution order, then id. Reused by the recency pass.
pub fn sort_ranked(ranked: &mut [RankedResult]) {
    ranked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.first_method_order().cmp(&b.first_method_order()))
            .then_with(|| a.result.source_id.cmp(&b.result.source_id))
    });
}
