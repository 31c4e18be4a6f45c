//! Pipeline orchestration: classify → cache check → concurrent sources →
//! seed-dependent sources → fusion → diversity → context assembly.
//!
//! Individual sources degrade to empty contributions on failure; the run
//! only errors when every dispatched store-backed source failed, so callers
//! can tell "nothing matched" from "nothing was searched".

use chrono::Utc;
use tracing::{debug, info, warn};

use trellis_core::config::{ContextConfig, GraphTraversalConfig, RetrievalConfig};
use trellis_core::errors::RetrievalError;
use trellis_core::models::{
    CachedQuery, QueryClassification, QueryMode, RankedResult, RetrievalMethod, RetrievalOutcome,
    RetrievalResult, RetrievalSummary, Scope, StoredEntity,
};
use trellis_core::traits::{CompletionService, Embedder, EntityStore, LinkStore, StoreResult};
use trellis_core::TrellisResult;

use crate::cache::QueryCache;
use crate::{assembly, classifier, diversity, fusion, navigator, sources};

const SOURCE_THREADS: usize = 4;

/// Multi-source retrieval engine over pluggable stores and services.
pub struct RetrievalEngine<'a> {
    store: &'a dyn EntityStore,
    links: &'a dyn LinkStore,
    embedder: &'a dyn Embedder,
    completion: Option<&'a dyn CompletionService>,
    cache: &'a QueryCache,
    config: RetrievalConfig,
    graph_config: GraphTraversalConfig,
    context_config: ContextConfig,
    /// Bounded pool for the independent sources; `None` falls back to the
    /// ambient rayon pool.
    pool: Option<rayon::ThreadPool>,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        store: &'a dyn EntityStore,
        links: &'a dyn LinkStore,
        embedder: &'a dyn Embedder,
        cache: &'a QueryCache,
    ) -> Self {
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(SOURCE_THREADS)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!(error = %e, "worker pool build failed, using ambient pool");
                None
            }
        };
        Self {
            store,
            links,
            embedder,
            completion: None,
            cache,
            config: RetrievalConfig::default(),
            graph_config: GraphTraversalConfig::default(),
            context_config: ContextConfig::default(),
            pool,
        }
    }

    /// Attach a completion service, enabling graph navigation.
    pub fn with_completion(mut self, completion: &'a dyn CompletionService) -> Self {
        self.completion = Some(completion);
        self
    }

    pub fn with_config(mut self, config: RetrievalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_graph_config(mut self, config: GraphTraversalConfig) -> Self {
        self.graph_config = config;
        self
    }

    pub fn with_context_config(mut self, config: ContextConfig) -> Self {
        self.context_config = config;
        self
    }

    pub fn cache_stats(&self) -> crate::cache::CacheStats {
        self.cache.stats()
    }

    /// Drop cached results for one user (e.g. after their notes change).
    pub fn invalidate_user(&self, user_id: &str) -> usize {
        self.cache.invalidate_user(user_id)
    }

    /// Run the full pipeline for one query.
    pub fn retrieve(
        &self,
        query: &str,
        scope: &Scope,
        mode_override: Option<QueryMode>,
    ) -> TrellisResult<RetrievalOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RetrievalError::InvalidQuery {
                reason: "query is empty".into(),
            }
            .into());
        }

        let classification = classifier::classify(query, mode_override);
        let domain = fusion::detect_domain(query);
        debug!(
            mode = ?classification.mode,
            intent = ?classification.intent,
            ?domain,
            "query classified"
        );

        let key = QueryCache::key(
            scope,
            query,
            self.config.entity_similarity_threshold,
            self.config.max_results,
            self.config.include_images,
            self.config.include_graph,
        );
        if let Some(cached) = self.cache.get(&key) {
            debug!("serving retrieval from cache");
            return Ok(RetrievalOutcome::from_cached(cached, classification));
        }

        // STANDARD first attempts the navigator as an alternate path: a
        // non-empty plan that yields results replaces multi-source
        // retrieval; an empty or fruitless plan falls through to it.
        if classification.mode == QueryMode::Standard {
            if let Some(completion) = self.completion {
                let plan = navigator::planner::plan(self.store, completion, query, scope);
                if !plan.is_empty() {
                    let navigated = navigator::executor::execute(
                        self.store,
                        self.links,
                        &plan,
                        query,
                        scope,
                        self.config.max_results,
                    );
                    if !navigated.is_empty() {
                        let lists = [(RetrievalMethod::Navigator, navigated)];
                        return Ok(self.finish(key, scope, classification, domain, &lists, 1));
                    }
                    debug!("navigation plan matched nothing, using multi-source retrieval");
                }
            }
        }

        let vector = match self.embedder.embed(query) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = %e, "embedding failed, skipping semantic sources");
                None
            }
        };

        // The four independent sources, joined in fixed order so completion
        // order can never affect the fused ranking.
        let run_sources = || {
            rayon::join(
                || {
                    rayon::join(
                        || {
                            vector.as_ref().map(|v| {
                                sources::semantic::entity_level(self.store, v, scope, &self.config)
                            })
                        },
                        || {
                            vector.as_ref().map(|v| {
                                sources::semantic::chunk_level(self.store, v, scope, &self.config)
                            })
                        },
                    )
                },
                || {
                    rayon::join(
                        || Some(sources::lexical::search(self.store, query, scope, &self.config)),
                        || Some(sources::title::search(self.store, query, scope)),
                    )
                },
            )
        };
        let ((semantic, chunks), (lexical, titles)) = match &self.pool {
            Some(pool) => pool.install(run_sources),
            None => run_sources(),
        };

        let mut dispatched = 0usize;
        let mut failures = 0usize;
        let mut unwrap_source =
            |name: &str, outcome: Option<StoreResult<Vec<RetrievalResult>>>| match outcome {
                None => Vec::new(),
                Some(Ok(results)) => {
                    dispatched += 1;
                    results
                }
                Some(Err(e)) => {
                    dispatched += 1;
                    failures += 1;
                    warn!(source = name, error = %e, "retrieval source failed");
                    Vec::new()
                }
            };
        let semantic = unwrap_source("semantic", semantic);
        let chunks = unwrap_source("chunk_semantic", chunks);
        let lexical = unwrap_source("lexical", lexical);
        let titles = unwrap_source("title", titles);

        if dispatched > 0 && failures == dispatched {
            return Err(RetrievalError::AllSourcesFailed {
                attempted: dispatched,
            }
            .into());
        }

        let seeds = self.resolve_seeds(&semantic, scope);

        let mut images = Vec::new();
        if self.config.include_images && !seeds.is_empty() {
            dispatched += 1;
            match sources::image::retrieve(self.store, self.links, query, &seeds, scope) {
                Ok(results) => images = results,
                Err(e) => warn!(error = %e, "image retrieval failed"),
            }
        }

        let mut graph = Vec::new();
        let run_graph = self.config.include_graph
            && classification.mode != QueryMode::Fast
            && !seeds.is_empty();
        if run_graph {
            dispatched += 1;
            graph = sources::graph::traverse(self.store, self.links, &seeds, scope, &self.graph_config);
        }

        // DEEP runs everything, so navigation joins fusion as one more
        // contributing list there; for STANDARD it was handled above.
        let mut navigated = Vec::new();
        if classification.mode == QueryMode::Deep {
            if let Some(completion) = self.completion {
                dispatched += 1;
                navigated = navigator::navigate(
                    self.store,
                    self.links,
                    completion,
                    query,
                    scope,
                    self.config.max_results,
                );
            }
        }

        let method_lists = [
            (RetrievalMethod::Semantic, semantic),
            (RetrievalMethod::ChunkSemantic, chunks),
            (RetrievalMethod::Lexical, lexical),
            (RetrievalMethod::TitleMatch, titles),
            (RetrievalMethod::Image, images),
            (RetrievalMethod::Graph, graph),
            (RetrievalMethod::Navigator, navigated),
        ];
        Ok(self.finish(key, scope, classification, domain, &method_lists, dispatched))
    }

    /// Shared pipeline tail: fuse → recency → diversity → assemble →
    /// summarize → cache.
    fn finish(
        &self,
        key: String,
        scope: &Scope,
        classification: QueryClassification,
        domain: fusion::QueryDomain,
        method_lists: &[(RetrievalMethod, Vec<RetrievalResult>)],
        dispatched: usize,
    ) -> RetrievalOutcome {
        let weights = fusion::weights_for(domain);
        let mut ranked = fusion::fuse(
            method_lists,
            &weights,
            self.config.rrf_k,
            self.config.max_results,
        );

        if classification.temporal_signal {
            fusion::recency::apply(&mut ranked, self.config.recency_half_life_days, Utc::now());
        }

        let min_slots = fusion::min_image_slots(domain, &self.config);
        let ranked = diversity::enforce(ranked, &self.config, min_slots);

        let context = assembly::assemble(&ranked, &self.context_config);
        let summary = build_summary(dispatched, &ranked);
        info!(
            results = ranked.len(),
            sources = dispatched,
            truncated = context.truncated,
            "retrieval complete"
        );

        self.cache.set(
            key,
            &scope.user_id,
            CachedQuery {
                context: context.clone(),
                ranked: ranked.clone(),
                summary: summary.clone(),
            },
        );

        RetrievalOutcome {
            context,
            ranked,
            summary,
            classification,
            from_cache: false,
        }
    }

    /// Resolve the top semantic hits back into stored entities; they seed
    /// image and graph retrieval. Lookup failures shrink the seed set.
    fn resolve_seeds(&self, semantic: &[RetrievalResult], scope: &Scope) -> Vec<StoredEntity> {
        let mut seeds = Vec::with_capacity(self.config.seed_count);
        for result in semantic.iter().take(self.config.seed_count) {
            match self.store.fetch_by_id(&result.source_id, scope) {
                Ok(Some(entity)) => seeds.push(entity),
                Ok(None) => {}
                Err(e) => warn!(id = %result.source_id, error = %e, "seed lookup failed"),
            }
        }
        seeds
    }
}

fn build_summary(dispatched: usize, ranked: &[RankedResult]) -> RetrievalSummary {
    let mut methods: Vec<RetrievalMethod> = ranked
        .iter()
        .flat_map(|r| r.method_scores.keys().copied())
        .collect();
    methods.sort();
    methods.dedup();

    let mut breakdown = std::collections::BTreeMap::new();
    for r in ranked {
        *breakdown.entry(r.result.kind.label().to_string()).or_insert(0) += 1;
    }

    let avg = if ranked.is_empty() {
        0.0
    } else {
        ranked.iter().map(|r| r.final_score).sum::<f64>() / ranked.len() as f64
    };

    RetrievalSummary {
        total_sources_searched: dispatched,
        sources_used: ranked.len(),
        methods_used: methods,
        avg_relevance_score: avg,
        source_type_breakdown: breakdown,
    }
}
