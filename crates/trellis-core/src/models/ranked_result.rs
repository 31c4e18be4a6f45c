use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::retrieval_method::RetrievalMethod;
use super::retrieval_result::RetrievalResult;

/// A fused candidate carrying its per-method contributions and final rank.
///
/// Invariants: at most one `RankedResult` per (kind, source_id); after any
/// sort stage, `rank` values form exactly 1..N with no gaps or duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// The display result: highest raw similarity among contributing methods.
    pub result: RetrievalResult,
    /// RRF contribution per method. Ordered map so iteration is deterministic.
    pub method_scores: BTreeMap<RetrievalMethod, f64>,
    pub final_score: f64,
    /// 1-based position after the most recent sort stage.
    pub rank: usize,
}

impl RankedResult {
    /// The earliest contributing method in fixed execution order.
    /// Used as the deterministic tie-break for equal final scores.
    pub fn first_method_order(&self) -> usize {
        self.method_scores
            .keys()
            .next()
            .map(|m| m.order())
            .unwrap_or(usize::MAX)
    }
}

/// Reassign ranks 1..N in current list order.
pub fn reassign_ranks(results: &mut [RankedResult]) {
    for (i, r) in results.iter_mut().enumerate() {
        r.rank = i + 1;
    }
}
