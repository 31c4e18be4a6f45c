use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::source_kind::SourceKind;

/// Owner/tenant scope for every store query. All retrieval is per-user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub user_id: String,
}

impl Scope {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// A stored knowledge-base entity as returned by the entity store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntity {
    pub id: String,
    pub title: String,
    pub content: String,
    pub kind: SourceKind,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A directed link edge between two entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRow {
    pub from_id: String,
    pub to_id: String,
    pub from_title: String,
    pub to_title: String,
}

/// Compact description of a graph region for the navigator prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: String,
    pub label: String,
    pub entity_count: usize,
}

/// Tag with usage count, for the navigator prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSummary {
    pub tag: String,
    pub count: usize,
}
