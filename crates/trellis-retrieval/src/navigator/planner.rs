//! Navigation planning: one completion call, strictly validated.
//!
//! The external classifier is unreliable by contract. Whatever comes back is
//! parsed as strict JSON (tolerating a fenced code block) and shape-capped;
//! any failure yields an empty plan and the caller falls back to standard
//! multi-source retrieval. This module never returns an error.

use tracing::{debug, warn};

use trellis_core::constants::NAVIGATOR_PROMPT_BUDGET;
use trellis_core::models::{
    NavigationPlan, RegionSummary, Scope, TagSummary, MAX_PLAN_KEYWORDS, MAX_PLAN_REGIONS,
    MAX_PLAN_TAGS,
};
use trellis_core::traits::{CompletionService, EntityStore};

/// Produce a validated plan for the query, or an empty plan on any failure.
pub fn plan(
    store: &dyn EntityStore,
    completion: &dyn CompletionService,
    query: &str,
    scope: &Scope,
) -> NavigationPlan {
    let regions = match store.region_summaries(scope) {
        Ok(regions) => regions,
        Err(e) => {
            warn!(error = %e, "region summary query failed, skipping navigation");
            return NavigationPlan::default();
        }
    };
    let tags = match store.tag_summaries(scope) {
        Ok(tags) => tags,
        Err(e) => {
            warn!(error = %e, "tag summary query failed, skipping navigation");
            return NavigationPlan::default();
        }
    };
    if regions.is_empty() && tags.is_empty() {
        return NavigationPlan::default();
    }

    let prompt = build_prompt(&regions, &tags, query);
    let response = match completion.classify_or_complete(&prompt) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "completion service failed, skipping navigation");
            return NavigationPlan::default();
        }
    };

    let plan = parse_plan(&response);
    debug!(
        regions = plan.region_ids.len(),
        tags = plan.tags.len(),
        keywords = plan.keywords.len(),
        "navigation plan parsed"
    );
    plan
}

/// Compact summary of the graph plus instructions for a strict-JSON reply.
pub fn build_prompt(regions: &[RegionSummary], tags: &[TagSummary], query: &str) -> String {
    let mut prompt = String::with_capacity(NAVIGATOR_PROMPT_BUDGET);
    prompt.push_str("Select where to look in a personal knowledge graph.\n\nRegions:\n");
    for region in regions {
        let line = format!(
            "- {} ({}, {} entities)\n",
            region.id, region.label, region.entity_count
        );
        if prompt.len() + line.len() > NAVIGATOR_PROMPT_BUDGET / 2 {
            break;
        }
        prompt.push_str(&line);
    }
    prompt.push_str("\nTags:\n");
    for tag in tags {
        let line = format!("- {} ({})\n", tag.tag, tag.count);
        if prompt.len() + line.len() > NAVIGATOR_PROMPT_BUDGET {
            break;
        }
        prompt.push_str(&line);
    }
    prompt.push_str(&format!(
        "\nQuery: {query}\n\nReply with JSON only: \
         {{\"region_ids\": [..] (max {MAX_PLAN_REGIONS}), \
         \"tags\": [..] (max {MAX_PLAN_TAGS}), \
         \"keywords\": [..] (max {MAX_PLAN_KEYWORDS})}}"
    ));
    prompt
}

/// Parse the service response into a validated plan. Malformed shapes,
/// stray prose, and fenced code blocks all degrade to an empty plan.
pub fn parse_plan(response: &str) -> NavigationPlan {
    // Tolerate ```json fences and surrounding prose: take the outermost
    // brace-delimited span.
    let start = response.find('{');
    let end = response.rfind('}');
    let json = match (start, end) {
        (Some(s), Some(e)) if s < e => &response[s..=e],
        _ => {
            warn!("navigation response contained no JSON object");
            return NavigationPlan::default();
        }
    };

    match serde_json::from_str::<NavigationPlan>(json) {
        Ok(plan) => plan.validated(),
        Err(e) => {
            warn!(error = %e, "navigation plan failed to parse");
            NavigationPlan::default()
        }
    }
}
