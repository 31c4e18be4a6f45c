//! Graph navigator: ask the completion service where to look, then execute
//! the plan deterministically. Planning failures degrade to an empty result
//! set so the engine can fall back to multi-source retrieval.

pub mod executor;
pub mod planner;

use trellis_core::models::{RetrievalResult, Scope};
use trellis_core::traits::{CompletionService, EntityStore, LinkStore};

/// Plan and execute a navigation pass. Returns an empty vector when no plan
/// could be produced or the plan matched nothing.
pub fn navigate(
    store: &dyn EntityStore,
    links: &dyn LinkStore,
    completion: &dyn CompletionService,
    query: &str,
    scope: &Scope,
    max_results: usize,
) -> Vec<RetrievalResult> {
    let plan = planner::plan(store, completion, query, scope);
    if plan.is_empty() {
        return Vec::new();
    }
    executor::execute(store, links, &plan, query, scope, max_results)
}
