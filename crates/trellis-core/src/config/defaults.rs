//! Default values for every configuration knob, in one place.

use std::time::Duration;

/// Cosine threshold for entity-level semantic search. Lower than the chunk
/// threshold because whole-entity embeddings dilute specificity.
pub const ENTITY_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Cosine threshold for chunk-level semantic search.
pub const CHUNK_SIMILARITY_THRESHOLD: f64 = 0.65;

/// Boost multiplier applied to chunk-level hits (capped at 1.0).
pub const CHUNK_BOOST: f64 = 1.1;

/// Per-source fetch limit before fusion.
pub const SOURCE_LIMIT: usize = 20;

/// Final ranked-list length.
pub const MAX_RESULTS: usize = 20;

/// RRF smoothing constant.
pub const RRF_K: u32 = 60;

/// Number of top semantic hits used to seed image and graph retrieval.
pub const SEED_COUNT: usize = 3;

/// Half-life for the recency boost, in days.
pub const RECENCY_HALF_LIFE_DAYS: f64 = 30.0;

/// Maximum chunks kept per linked document.
pub const MAX_CHUNKS_PER_DOCUMENT: usize = 3;

/// Additional chunks from a document must score at least this fraction of
/// that document's best chunk.
pub const CHUNK_QUALITY_GATE: f64 = 0.5;

/// Cap on results matching the dominant generic-title pattern.
pub const GENERIC_TITLE_CAP: usize = 3;

/// Minimum image slots expected among the top 10 results.
pub const MIN_IMAGE_SLOTS: usize = 2;

/// Image slots reserved when the query is image-focused.
pub const MIN_IMAGE_SLOTS_IMAGE_DOMAIN: usize = 3;

/// Minimum score for an image to qualify for slot promotion.
pub const IMAGE_MIN_THRESHOLD: f64 = 0.15;

// --- Fusion weights (baseline table) ---
pub const WEIGHT_SEMANTIC: f64 = 0.35;
pub const WEIGHT_CHUNK: f64 = 0.20;
pub const WEIGHT_GRAPH: f64 = 0.15;
pub const WEIGHT_LEXICAL: f64 = 0.10;
pub const WEIGHT_IMAGE: f64 = 0.20;
pub const WEIGHT_TITLE: f64 = 0.25;
/// Fallback for methods without an explicit table entry (e.g. navigator
/// results merged into fusion). Deliberately small.
pub const WEIGHT_FALLBACK: f64 = 0.05;
/// Image weight when the query carries image-domain cues.
pub const WEIGHT_IMAGE_FOCUSED: f64 = 0.40;
/// Chunk weight when the query carries document-domain cues.
pub const WEIGHT_CHUNK_DOCUMENT_FOCUSED: f64 = 0.30;

// --- Graph traversal ---
pub const MAX_HOPS: u32 = 2;
pub const MAX_RESULTS_PER_HOP: usize = 5;
pub const RELEVANCE_DECAY: f64 = 0.5;

// --- Context assembly ---
pub const MAX_TOKENS: usize = 2000;
pub const MAX_CONTENT_PER_SOURCE: usize = 600;

// --- Cache ---
pub const CACHE_CAPACITY: usize = 128;
pub const CACHE_TTL: Duration = Duration::from_secs(300);
