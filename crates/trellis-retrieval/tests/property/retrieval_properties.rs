//! Property tests for fusion and diversity invariants.

use proptest::prelude::*;

use trellis_core::config::{FusionWeights, RetrievalConfig};
use trellis_core::models::{RetrievalMethod, RetrievalResult, SourceKind};
use trellis_retrieval::{diversity, fusion};

fn result(id: u32, similarity: f64, method: RetrievalMethod) -> RetrievalResult {
    RetrievalResult::new(
        SourceKind::Note,
        format!("n{id:04}"),
        format!("Note {id}"),
        "body text".to_string(),
        similarity,
        method,
    )
}

fn method_list(
    method: RetrievalMethod,
    ids: &[u32],
) -> (RetrievalMethod, Vec<RetrievalResult>) {
    let list = ids
        .iter()
        .enumerate()
        .map(|(pos, &id)| result(id, 1.0 - pos as f64 * 0.01, method))
        .collect();
    (method, list)
}

proptest! {
    #[test]
    fn fused_ranks_are_contiguous_and_scores_non_increasing(
        semantic_ids in prop::collection::vec(0u32..50, 0..20),
        lexical_ids in prop::collection::vec(0u32..50, 0..20),
        max_results in 1usize..30,
    ) {
        let lists = [
            method_list(RetrievalMethod::Semantic, &semantic_ids),
            method_list(RetrievalMethod::Lexical, &lexical_ids),
        ];
        let ranked = fusion::fuse(&lists, &FusionWeights::default(), 60, max_results);

        prop_assert!(ranked.len() <= max_results);
        for (i, r) in ranked.iter().enumerate() {
            prop_assert_eq!(r.rank, i + 1);
            if i > 0 {
                prop_assert!(ranked[i - 1].final_score >= r.final_score);
            }
        }
    }

    #[test]
    fn fused_entities_are_unique(
        semantic_ids in prop::collection::vec(0u32..20, 0..30),
        lexical_ids in prop::collection::vec(0u32..20, 0..30),
    ) {
        let lists = [
            method_list(RetrievalMethod::Semantic, &semantic_ids),
            method_list(RetrievalMethod::Lexical, &lexical_ids),
        ];
        let ranked = fusion::fuse(&lists, &FusionWeights::default(), 60, 100);

        let mut ids: Vec<&str> = ranked.iter().map(|r| r.result.source_id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
    }

    #[test]
    fn fusion_is_deterministic(
        semantic_ids in prop::collection::vec(0u32..50, 0..20),
        title_ids in prop::collection::vec(0u32..50, 0..20),
    ) {
        let lists = [
            method_list(RetrievalMethod::Semantic, &semantic_ids),
            method_list(RetrievalMethod::TitleMatch, &title_ids),
        ];
        let a = fusion::fuse(&lists, &FusionWeights::default(), 60, 50);
        let b = fusion::fuse(&lists, &FusionWeights::default(), 60, 50);

        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(&x.result.source_id, &y.result.source_id);
            prop_assert_eq!(x.final_score, y.final_score);
        }
    }

    #[test]
    fn diversity_never_grows_the_list_and_keeps_ranks_contiguous(
        ids in prop::collection::vec(0u32..40, 0..40),
    ) {
        let lists = [method_list(RetrievalMethod::Semantic, &ids)];
        let ranked = fusion::fuse(&lists, &FusionWeights::default(), 60, 40);
        let before = ranked.len();

        let config = RetrievalConfig::default();
        let survivors = diversity::enforce(ranked, &config, config.min_image_slots);

        prop_assert!(survivors.len() <= before);
        for (i, r) in survivors.iter().enumerate() {
            prop_assert_eq!(r.rank, i + 1);
        }
    }

    #[test]
    fn appearing_in_a_second_list_never_lowers_the_score(
        ids in prop::collection::vec(0u32..30, 1..20),
    ) {
        let solo = [method_list(RetrievalMethod::Semantic, &ids)];
        let both = [
            method_list(RetrievalMethod::Semantic, &ids),
            method_list(RetrievalMethod::Lexical, &ids),
        ];
        let solo_ranked = fusion::fuse(&solo, &FusionWeights::default(), 60, 50);
        let both_ranked = fusion::fuse(&both, &FusionWeights::default(), 60, 50);

        for s in &solo_ranked {
            let b = both_ranked
                .iter()
                .find(|r| r.result.source_id == s.result.source_id);
            prop_assert!(b.is_some());
            prop_assert!(b.unwrap().final_score >= s.final_score);
        }
    }
}
