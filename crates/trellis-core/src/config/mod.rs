//! Plain configuration value objects. No file parsing lives in this core;
//! callers construct these directly or take the defaults.

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::RetrievalMethod;

/// Tunables for the retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub entity_similarity_threshold: f64,
    pub chunk_similarity_threshold: f64,
    /// Multiplier applied to chunk-level similarity, capped at 1.0.
    pub chunk_boost: f64,
    /// Per-source fetch limit before fusion.
    pub source_limit: usize,
    /// Final ranked-list length.
    pub max_results: usize,
    pub rrf_k: u32,
    pub include_images: bool,
    pub include_graph: bool,
    /// Top semantic hits used to seed image and graph retrieval.
    pub seed_count: usize,
    pub recency_half_life_days: f64,
    pub max_chunks_per_document: usize,
    /// Extra same-document chunks must score at least this fraction of the
    /// document's best chunk. Out-of-range values fall back to the default.
    pub chunk_quality_gate: f64,
    /// Regex matching the dominant generic category (e.g. daily-note titles).
    /// `None` disables the diversity cap.
    pub generic_title_pattern: Option<String>,
    pub generic_title_cap: usize,
    pub min_image_slots: usize,
    pub image_min_threshold: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            entity_similarity_threshold: defaults::ENTITY_SIMILARITY_THRESHOLD,
            chunk_similarity_threshold: defaults::CHUNK_SIMILARITY_THRESHOLD,
            chunk_boost: defaults::CHUNK_BOOST,
            source_limit: defaults::SOURCE_LIMIT,
            max_results: defaults::MAX_RESULTS,
            rrf_k: defaults::RRF_K,
            include_images: true,
            include_graph: true,
            seed_count: defaults::SEED_COUNT,
            recency_half_life_days: defaults::RECENCY_HALF_LIFE_DAYS,
            max_chunks_per_document: defaults::MAX_CHUNKS_PER_DOCUMENT,
            chunk_quality_gate: defaults::CHUNK_QUALITY_GATE,
            generic_title_pattern: None,
            generic_title_cap: defaults::GENERIC_TITLE_CAP,
            min_image_slots: defaults::MIN_IMAGE_SLOTS,
            image_min_threshold: defaults::IMAGE_MIN_THRESHOLD,
        }
    }
}

impl RetrievalConfig {
    /// Quality gate with invalid values ignored in favor of the default.
    pub fn effective_quality_gate(&self) -> f64 {
        if (0.0..=1.0).contains(&self.chunk_quality_gate) {
            self.chunk_quality_gate
        } else {
            defaults::CHUNK_QUALITY_GATE
        }
    }
}

/// Explicit per-method weight table for RRF fusion.
///
/// Methods without an entry use [`FusionWeights::fallback`]; adding a
/// retrieval method means deciding its weight here, not matching a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionWeights {
    pub semantic: f64,
    pub chunk: f64,
    pub graph: f64,
    pub lexical: f64,
    pub image: f64,
    pub title: f64,
    /// Weight for methods without a dedicated entry.
    pub fallback: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            semantic: defaults::WEIGHT_SEMANTIC,
            chunk: defaults::WEIGHT_CHUNK,
            graph: defaults::WEIGHT_GRAPH,
            lexical: defaults::WEIGHT_LEXICAL,
            image: defaults::WEIGHT_IMAGE,
            title: defaults::WEIGHT_TITLE,
            fallback: defaults::WEIGHT_FALLBACK,
        }
    }
}

impl FusionWeights {
    pub fn weight(&self, method: RetrievalMethod) -> f64 {
        match method {
            RetrievalMethod::Semantic => self.semantic,
            RetrievalMethod::ChunkSemantic => self.chunk,
            RetrievalMethod::Graph => self.graph,
            RetrievalMethod::Lexical => self.lexical,
            RetrievalMethod::Image => self.image,
            RetrievalMethod::TitleMatch => self.title,
            RetrievalMethod::Navigator => self.fallback,
        }
    }

    /// Weight table for image-focused queries.
    pub fn image_focused() -> Self {
        Self {
            image: defaults::WEIGHT_IMAGE_FOCUSED,
            ..Self::default()
        }
    }

    /// Weight table for document-focused queries.
    pub fn document_focused() -> Self {
        Self {
            chunk: defaults::WEIGHT_CHUNK_DOCUMENT_FOCUSED,
            ..Self::default()
        }
    }
}

/// Link-graph BFS tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphTraversalConfig {
    pub max_hops: u32,
    /// Per-hop emission cap, multiplied by the seed count.
    pub max_results_per_hop: usize,
    /// Score decay per hop, in (0, 1]. Invalid values fall back to the default.
    pub relevance_decay: f64,
    pub include_backlinks: bool,
}

impl Default for GraphTraversalConfig {
    fn default() -> Self {
        Self {
            max_hops: defaults::MAX_HOPS,
            max_results_per_hop: defaults::MAX_RESULTS_PER_HOP,
            relevance_decay: defaults::RELEVANCE_DECAY,
            include_backlinks: true,
        }
    }
}

impl GraphTraversalConfig {
    pub fn effective_decay(&self) -> f64 {
        if self.relevance_decay > 0.0 && self.relevance_decay <= 1.0 {
            self.relevance_decay
        } else {
            defaults::RELEVANCE_DECAY
        }
    }
}

/// Context assembly tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Token budget; the character ceiling is `max_tokens * 4`.
    pub max_tokens: usize,
    /// Character cap per included source body.
    pub max_content_per_source: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_tokens: defaults::MAX_TOKENS,
            max_content_per_source: defaults::MAX_CONTENT_PER_SOURCE,
        }
    }
}

/// Result cache sizing.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CACHE_CAPACITY,
            ttl: defaults::CACHE_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_table_covers_every_method() {
        let w = FusionWeights::default();
        assert!((w.weight(RetrievalMethod::Semantic) - 0.35).abs() < f64::EPSILON);
        assert!((w.weight(RetrievalMethod::Navigator) - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn image_focused_raises_image_weight_only() {
        let w = FusionWeights::image_focused();
        assert!((w.image - 0.40).abs() < f64::EPSILON);
        assert!((w.semantic - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_decay_falls_back_to_default() {
        let cfg = GraphTraversalConfig {
            relevance_decay: 1.7,
            ..Default::default()
        };
        assert!((cfg.effective_decay() - defaults::RELEVANCE_DECAY).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_quality_gate_falls_back_to_default() {
        let cfg = RetrievalConfig {
            chunk_quality_gate: -0.2,
            ..Default::default()
        };
        assert!((cfg.effective_quality_gate() - defaults::CHUNK_QUALITY_GATE).abs() < f64::EPSILON);
    }
}
