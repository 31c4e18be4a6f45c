//! Query-adaptive weight selection.
//!
//! Before fusion, the query is inspected for image- or document-domain cues;
//! a match overrides the baseline weight table toward that category.

use trellis_core::config::{defaults, FusionWeights, RetrievalConfig};

/// Content domain a query leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryDomain {
    General,
    Image,
    Document,
}

const IMAGE_CUES: &[&str] = &[
    "photo",
    "photos",
    "image",
    "images",
    "picture",
    "pictures",
    "screenshot",
    "show me",
    "look like",
    "looks like",
];

const DOCUMENT_CUES: &[&str] = &[
    "pdf",
    "report",
    "contract",
    "invoice",
    "paper",
    "in the document",
    "the document says",
];

/// Detect the query's domain. Image cues take precedence when both match.
pub fn detect_domain(query: &str) -> QueryDomain {
    let lower = query.to_lowercase();
    if IMAGE_CUES.iter().any(|cue| lower.contains(cue)) {
        QueryDomain::Image
    } else if DOCUMENT_CUES.iter().any(|cue| lower.contains(cue)) {
        QueryDomain::Document
    } else {
        QueryDomain::General
    }
}

/// The weight table for a detected domain.
pub fn weights_for(domain: QueryDomain) -> FusionWeights {
    match domain {
        QueryDomain::General => FusionWeights::default(),
        QueryDomain::Image => FusionWeights::image_focused(),
        QueryDomain::Document => FusionWeights::document_focused(),
    }
}

/// Image-focused queries also reserve more image slots.
pub fn min_image_slots(domain: QueryDomain, config: &RetrievalConfig) -> usize {
    match domain {
        QueryDomain::Image => config
            .min_image_slots
            .max(defaults::MIN_IMAGE_SLOTS_IMAGE_DOMAIN),
        _ => config.min_image_slots,
    }
}
