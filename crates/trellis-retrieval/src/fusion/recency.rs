//! Recency pass: boosts recently created notes after fusion.

use chrono::{DateTime, Utc};

use trellis_core::models::{reassign_ranks, RankedResult, SourceKind};

use super::rrf::sort_ranked;

/// Maximum boost for a note created right now.
const RECENCY_BOOST: f64 = 0.2;

/// Add `0.2 × 0.5^(age_days / half_life_days)` to note results with a known
/// timestamp, then re-sort and re-rank. Other kinds are untouched.
pub fn apply(ranked: &mut Vec<RankedResult>, half_life_days: f64, now: DateTime<Utc>) {
    if half_life_days <= 0.0 {
        return;
    }

    for r in ranked.iter_mut() {
        if !matches!(r.result.kind, SourceKind::Note) {
            continue;
        }
        if let Some(created_at) = r.result.created_at {
            let age_days = (now - created_at).num_seconds().max(0) as f64 / 86_400.0;
            r.final_score += RECENCY_BOOST * 0.5_f64.powf(age_days / half_life_days);
        }
    }

    sort_ranked(ranked);
    reassign_ranks(ranked);
}
