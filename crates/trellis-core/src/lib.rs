//! # trellis-core
//!
//! Foundation crate for the Trellis retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! The retrieval crate depends on this; it performs no I/O itself.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{
    CacheConfig, ContextConfig, FusionWeights, GraphTraversalConfig, RetrievalConfig,
};
pub use errors::{TrellisError, TrellisResult};
pub use models::{
    AssembledContext, CitationSource, QueryClassification, RankedResult, RetrievalMethod,
    RetrievalResult, Scope, SourceKind, StoredEntity,
};
