//! Deduplication and diversity enforcement, applied after fusion in fixed
//! order: entity dedup → generic-category cap → image slot reservation.
//! Ranks are reassigned 1..N after every stage.

pub mod caps;
pub mod dedup;
pub mod image_slots;

use trellis_core::config::RetrievalConfig;
use trellis_core::models::RankedResult;

/// Run all three stages with the given configuration.
pub fn enforce(
    ranked: Vec<RankedResult>,
    config: &RetrievalConfig,
    min_image_slots: usize,
) -> Vec<RankedResult> {
    let deduped = dedup::apply(ranked, config);
    let capped = caps::apply(
        deduped,
        config.generic_title_pattern.as_deref(),
        config.generic_title_cap,
    );
    image_slots::apply(capped, min_image_slots, config.image_min_threshold)
}
