//! Fusion & ranking: weighted RRF over source outputs with query-adaptive
//! weights, plus an optional recency pass for temporally anchored queries.

pub mod recency;
pub mod rrf;
pub mod weights;

pub use rrf::fuse;
pub use weights::{detect_domain, min_image_slots, weights_for, QueryDomain};
