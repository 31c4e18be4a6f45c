use serde::{Deserialize, Serialize};

/// Maximum regions a plan may select.
pub const MAX_PLAN_REGIONS: usize = 3;
/// Maximum tags a plan may select.
pub const MAX_PLAN_TAGS: usize = 5;
/// Maximum keywords a plan may carry.
pub const MAX_PLAN_KEYWORDS: usize = 5;

/// A structured selection guiding deterministic graph retrieval.
///
/// Produced by an unreliable external classifier; always run through
/// [`NavigationPlan::validated`] before use. A malformed or empty plan is
/// never an error — the caller falls back to standard multi-source retrieval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationPlan {
    pub region_ids: Vec<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
}

impl NavigationPlan {
    /// Enforce shape caps and drop blank entries. Oversized lists are
    /// truncated rather than rejected.
    pub fn validated(mut self) -> Self {
        self.region_ids.retain(|r| !r.trim().is_empty());
        self.tags.retain(|t| !t.trim().is_empty());
        self.keywords.retain(|k| !k.trim().is_empty());
        self.region_ids.truncate(MAX_PLAN_REGIONS);
        self.tags.truncate(MAX_PLAN_TAGS);
        self.keywords.truncate(MAX_PLAN_KEYWORDS);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.region_ids.is_empty() && self.tags.is_empty() && self.keywords.is_empty()
    }
}
