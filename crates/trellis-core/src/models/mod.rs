//! Value objects owned by a single query execution.
//!
//! Nothing here is shared across queries except through the result cache,
//! which owns deep copies keyed by a derived hash.

mod assembled_context;
mod citation;
mod classification;
mod entity;
mod navigation_plan;
mod outcome;
mod ranked_result;
mod relationship;
mod retrieval_method;
mod retrieval_result;
mod source_kind;
mod summary;

pub use assembled_context::AssembledContext;
pub use citation::CitationSource;
pub use classification::{QueryClassification, QueryIntent, QueryMode};
pub use entity::{LinkRow, RegionSummary, Scope, StoredEntity, TagSummary};
pub use navigation_plan::{
    NavigationPlan, MAX_PLAN_KEYWORDS, MAX_PLAN_REGIONS, MAX_PLAN_TAGS,
};
pub use outcome::{CachedQuery, RetrievalOutcome};
pub use ranked_result::{reassign_ranks, RankedResult};
pub use relationship::{LinkDirection, RelationshipLink};
pub use retrieval_method::RetrievalMethod;
pub use retrieval_result::RetrievalResult;
pub use source_kind::SourceKind;
pub use summary::RetrievalSummary;
