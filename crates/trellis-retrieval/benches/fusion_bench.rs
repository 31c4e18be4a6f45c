//! Criterion benchmarks for the fusion and diversity hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use trellis_core::config::{FusionWeights, RetrievalConfig};
use trellis_core::models::{RetrievalMethod, RetrievalResult, SourceKind};
use trellis_retrieval::{diversity, fusion};

/// Helper: one method's ranked list of `n` synthetic results.
fn make_list(method: RetrievalMethod, n: usize, offset: usize) -> Vec<RetrievalResult> {
    (0..n)
        .map(|i| {
            let id = (i * 3 + offset) % (n * 2);
            RetrievalResult::new(
                SourceKind::Note,
                format!("n{id:05}"),
                format!("Note {id}"),
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit.".to_string(),
                1.0 - i as f64 / n as f64,
                method,
            )
        })
        .collect()
}

fn bench_fuse(c: &mut Criterion) {
    let lists = [
        (RetrievalMethod::Semantic, make_list(RetrievalMethod::Semantic, 200, 0)),
        (RetrievalMethod::ChunkSemantic, make_list(RetrievalMethod::ChunkSemantic, 200, 1)),
        (RetrievalMethod::Lexical, make_list(RetrievalMethod::Lexical, 200, 2)),
        (RetrievalMethod::TitleMatch, make_list(RetrievalMethod::TitleMatch, 50, 3)),
    ];
    let weights = FusionWeights::default();

    c.bench_function("rrf_fuse_650_results", |b| {
        b.iter(|| fusion::fuse(black_box(&lists), &weights, 60, 20))
    });
}

fn bench_fuse_and_diversify(c: &mut Criterion) {
    let lists = [
        (RetrievalMethod::Semantic, make_list(RetrievalMethod::Semantic, 200, 0)),
        (RetrievalMethod::Lexical, make_list(RetrievalMethod::Lexical, 200, 2)),
    ];
    let weights = FusionWeights::default();
    let config = RetrievalConfig::default();

    c.bench_function("fuse_then_diversity_400_results", |b| {
        b.iter(|| {
            let ranked = fusion::fuse(black_box(&lists), &weights, 60, 20);
            diversity::enforce(ranked, &config, config.min_image_slots)
        })
    });
}

criterion_group!(benches, bench_fuse, bench_fuse_and_diversify);
criterion_main!(benches);
