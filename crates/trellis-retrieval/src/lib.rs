//! # trellis-retrieval
//!
//! Multi-source retrieval-fusion and context-assembly engine for a personal
//! knowledge base. Turns a natural-language query into a relevance-ranked,
//! citation-indexed evidence set for grounded answer generation.
//!
//! Pipeline: classify → cache check → concurrent sources → RRF fusion →
//! dedup/diversity → context assembly. See [`engine::RetrievalEngine`].

pub mod assembly;
pub mod cache;
pub mod classifier;
pub mod diversity;
pub mod engine;
pub mod fusion;
pub mod navigator;
pub mod sources;

#[cfg(test)]
pub(crate) mod testutil;

pub use cache::{CacheStats, QueryCache};
pub use engine::RetrievalEngine;
