use serde::{Deserialize, Serialize};

use super::citation::CitationSource;

/// Citation-indexed context text ready for answer generation.
///
/// Invariant: `total_tokens_approx <= max_tokens` unless exactly one source
/// was force-included (truncated) to avoid an empty context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembledContext {
    pub formatted_text: String,
    pub citations: Vec<CitationSource>,
    /// Approximation: formatted characters / 4.
    pub total_tokens_approx: usize,
    /// True iff at least one candidate was dropped or cut for space.
    pub truncated: bool,
}

impl AssembledContext {
    pub fn empty() -> Self {
        Self {
            formatted_text: String::new(),
            citations: Vec::new(),
            total_tokens_approx: 0,
            truncated: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }
}
