//! Token-budgeted, citation-indexed context assembly.

use trellis_core::config::ContextConfig;
use trellis_core::constants::CHARS_PER_TOKEN;
use trellis_core::models::{AssembledContext, CitationSource, RankedResult};

/// Assemble ranked results into context text for answer generation.
///
/// Sources are taken in rank order until the character budget
/// (`max_tokens × 4`) would be exceeded. If not even the first source fits,
/// it is force-included (truncated) so the context is never empty while
/// candidates exist. `truncated` is set iff any candidate was dropped or cut.
pub fn assemble(ranked: &[RankedResult], config: &ContextConfig) -> AssembledContext {
    let char_budget = config.max_tokens * CHARS_PER_TOKEN;
    let mut text = String::new();
    let mut citations: Vec<CitationSource> = Vec::new();
    let mut truncated = false;

    for r in ranked {
        let index = citations.len() + 1;
        let (body, cut) = truncate_body(&r.result.content, config.max_content_per_source);
        let block = format!("{}\n{}\n\n", header(index, r), body);

        if text.len() + block.len() > char_budget {
            if citations.is_empty() {
                // Force-include the first source so the context is never
                // empty when at least one candidate exists.
                truncated = true;
                push_block(&mut text, &mut citations, r, index, body, block);
            } else {
                truncated = true;
            }
            break;
        }

        truncated |= cut;
        push_block(&mut text, &mut citations, r, index, body, block);
    }

    // Dropped candidates also mean truncation.
    if citations.len() < ranked.len() {
        truncated = true;
    }

    AssembledContext {
        total_tokens_approx: text.len() / CHARS_PER_TOKEN,
        formatted_text: text,
        citations,
        truncated,
    }
}

fn push_block(
    text: &mut String,
    citations: &mut Vec<CitationSource>,
    r: &RankedResult,
    index: usize,
    body: String,
    block: String,
) {
    text.push_str(&block);
    citations.push(CitationSource {
        index,
        kind: r.result.kind.clone(),
        source_id: r.result.source_id.clone(),
        title: r.result.title.clone(),
        content: body,
        relevance_score: r.result.similarity,
        retrieval_method: r.result.method,
        hop_count: r.result.hop_count,
        relationship_chain: r.result.relationship_chain.clone(),
    });
}

/// One header line per source, e.g.
/// `[2] NOTE "Borrow checker" (relevance 74%, graph, 2 hops: "A" → "B", "B" → "C")`.
fn header(index: usize, r: &RankedResult) -> String {
    let relevance = (r.result.similarity * 100.0).round() as u32;
    let mut line = format!(
        "[{index}] {} \"{}\" (relevance {relevance}%, {}",
        r.result.kind.label().to_uppercase(),
        r.result.title,
        r.result.method.label(),
    );
    if r.result.hop_count > 0 {
        let chain: Vec<String> = r
            .result
            .relationship_chain
            .iter()
            .map(|link| link.describe())
            .collect();
        line.push_str(&format!(
            ", {} hop{}: {}",
            r.result.hop_count,
            if r.result.hop_count == 1 { "" } else { "s" },
            chain.join(", ")
        ));
    }
    line.push(')');
    line
}

/// Cut `content` to at most `limit` characters, preferring the last sentence
/// boundary, then the last word boundary, else a hard cut with an ellipsis.
fn truncate_body(content: &str, limit: usize) -> (String, bool) {
    if content.chars().count() <= limit {
        return (content.to_string(), false);
    }
    let cut: String = content.chars().take(limit).collect();

    if let Some(pos) = cut.rfind(['.', '!', '?']) {
        let sentence = cut[..=pos].trim_end();
        if !sentence.is_empty() {
            return (sentence.to_string(), true);
        }
    }
    if let Some(pos) = cut.rfind(char::is_whitespace) {
        let words = cut[..pos].trim_end();
        if !words.is_empty() {
            return (format!("{words}…"), true);
        }
    }
    (format!("{cut}…"), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use trellis_core::models::{RetrievalMethod, RetrievalResult, SourceKind};

    fn ranked(id: &str, content: &str) -> RankedResult {
        RankedResult {
            result: RetrievalResult::new(
                SourceKind::Note,
                id,
                "Title",
                content,
                0.8,
                RetrievalMethod::Semantic,
            ),
            method_scores: BTreeMap::new(),
            final_score: 0.01,
            rank: 1,
        }
    }

    #[test]
    fn all_sources_fit_under_budget() {
        let list = vec![ranked("a", "First note body."), ranked("b", "Second body.")];
        let ctx = assemble(&list, &ContextConfig::default());
        assert_eq!(ctx.citations.len(), 2);
        assert!(!ctx.truncated);
        assert!(ctx.formatted_text.contains("[1] NOTE"));
        assert!(ctx.formatted_text.contains("[2] NOTE"));
        assert!(ctx.total_tokens_approx <= ContextConfig::default().max_tokens);
    }

    #[test]
    fn budget_stops_inclusion_and_sets_truncated() {
        let config = ContextConfig {
            max_tokens: 50, // 200 chars
            max_content_per_source: 120,
        };
        let long = "x".repeat(110);
        let list = vec![ranked("a", &long), ranked("b", &long), ranked("c", &long)];
        let ctx = assemble(&list, &config);
        assert_eq!(ctx.citations.len(), 1);
        assert!(ctx.truncated);
        assert!(ctx.formatted_text.len() <= 200);
    }

    #[test]
    fn first_source_is_force_included_when_nothing_fits() {
        let config = ContextConfig {
            max_tokens: 10, // 40 chars — smaller than any block
            max_content_per_source: 100,
        };
        let list = vec![ranked("a", "This body is clearly longer than forty characters in total.")];
        let ctx = assemble(&list, &config);
        assert_eq!(ctx.citations.len(), 1);
        assert!(ctx.truncated);
        assert!(!ctx.formatted_text.is_empty());
    }

    #[test]
    fn empty_candidates_give_empty_untruncated_context() {
        let ctx = assemble(&[], &ContextConfig::default());
        assert!(ctx.is_empty());
        assert!(!ctx.truncated);
        assert_eq!(ctx.total_tokens_approx, 0);
    }

    #[test]
    fn hop_results_carry_chain_explanation() {
        let mut r = ranked("a", "Linked note body.");
        r.result.hop_count = 1;
        r.result.relationship_chain = vec![trellis_core::models::RelationshipLink {
            direction: trellis_core::models::LinkDirection::Forward,
            from_id: "s".into(),
            to_id: "a".into(),
            from_title: "Seed".into(),
            to_title: "Title".into(),
        }];
        let ctx = assemble(&[r], &ContextConfig::default());
        assert!(ctx.formatted_text.contains("1 hop: \"Seed\" → \"Title\""));
    }

    #[test]
    fn truncation_prefers_sentence_boundary() {
        let (cut, truncated) = truncate_body("One sentence. Two sentences. Three are too many", 35);
        assert!(truncated);
        assert_eq!(cut, "One sentence. Two sentences.");
    }

    #[test]
    fn truncation_falls_back_to_word_boundary() {
        let (cut, truncated) = truncate_body("no sentence marks just many small words here", 25);
        assert!(truncated);
        assert_eq!(cut, "no sentence marks just…");
    }

    #[test]
    fn truncation_hard_cuts_unbroken_text() {
        let (cut, truncated) = truncate_body(&"a".repeat(40), 10);
        assert!(truncated);
        assert_eq!(cut, format!("{}…", "a".repeat(10)));
    }
}
