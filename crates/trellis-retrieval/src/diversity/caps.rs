//! Diversity cap on a dominant generic category.
//!
//! Personal knowledge bases accumulate recurring entries (daily notes,
//! journals) that crowd out specific material. Once the configured cap is
//! reached, further matches move to the tail of the list — demoted, never
//! dropped.

use regex::Regex;
use tracing::warn;

use trellis_core::models::{reassign_ranks, RankedResult};

pub fn apply(ranked: Vec<RankedResult>, pattern: Option<&str>, cap: usize) -> Vec<RankedResult> {
    let Some(pattern) = pattern else {
        return ranked;
    };
    let regex = match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => {
            // Invalid configuration is ignored, not fatal.
            warn!(pattern, error = %e, "invalid generic-title pattern, cap disabled");
            return ranked;
        }
    };

    let mut head = Vec::with_capacity(ranked.len());
    let mut tail = Vec::new();
    let mut matches = 0usize;

    for r in ranked {
        if regex.is_match(&r.result.title) {
            matches += 1;
            if matches > cap {
                tail.push(r);
                continue;
            }
        }
        head.push(r);
    }

    head.extend(tail);
    reassign_ranks(&mut head);
    head
}
