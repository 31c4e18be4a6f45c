//! Image slot reservation.
//!
//! When the top 10 holds fewer images than reserved, qualifying images are
//! promoted from below into positions starting at min(5, len) — visible but
//! never displacing the very top results.

use trellis_core::models::{reassign_ranks, RankedResult};

/// Window checked for image presence.
const TOP_WINDOW: usize = 10;
/// Promoted images land no higher than this 0-based position (rank 6).
const PROMOTION_FLOOR: usize = 5;

pub fn apply(
    mut ranked: Vec<RankedResult>,
    min_image_slots: usize,
    image_min_threshold: f64,
) -> Vec<RankedResult> {
    if min_image_slots == 0 || ranked.len() <= PROMOTION_FLOOR {
        return ranked;
    }

    let images_in_top = ranked
        .iter()
        .take(TOP_WINDOW)
        .filter(|r| r.result.kind.is_image())
        .count();
    if images_in_top >= min_image_slots {
        return ranked;
    }

    // Best qualifying images below the window, by raw similarity.
    let mut candidates: Vec<usize> = ranked
        .iter()
        .enumerate()
        .skip(TOP_WINDOW)
        .filter(|(_, r)| r.result.kind.is_image() && r.result.similarity >= image_min_threshold)
        .map(|(i, _)| i)
        .collect();
    candidates.sort_by(|&a, &b| {
        ranked[b]
            .result
            .similarity
            .partial_cmp(&ranked[a].result.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(min_image_slots - images_in_top);
    if candidates.is_empty() {
        return ranked;
    }

    // Remove from the bottom up so earlier indices stay valid.
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    let mut promoted: Vec<RankedResult> =
        candidates.iter().map(|&i| ranked.remove(i)).collect();
    // Best image first at the insertion point.
    promoted.reverse();

    let mut insert_at = PROMOTION_FLOOR.min(ranked.len());
    for image in promoted {
        ranked.insert(insert_at, image);
        insert_at += 1;
    }

    reassign_ranks(&mut ranked);
    ranked
}
