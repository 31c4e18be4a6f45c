//! In-memory fakes for unit tests. Compiled only under `cfg(test)`.

use std::collections::HashMap;

use trellis_core::errors::{ServiceError, StoreError};
use trellis_core::models::{
    LinkRow, RegionSummary, Scope, SourceKind, StoredEntity, TagSummary,
};
use trellis_core::traits::{
    CompletionService, Embedder, EntityStore, LinkStore, ServiceResult, StoreResult,
};

/// Configurable in-memory store implementing both `EntityStore` and
/// `LinkStore`. Every query surface can be pre-seeded or forced to fail.
#[derive(Default)]
pub(crate) struct MockStore {
    pub entities: HashMap<String, StoredEntity>,
    pub similarity_rows: Vec<(StoredEntity, f64)>,
    pub chunk_rows: Vec<(StoredEntity, f64)>,
    pub lexical_rows: Vec<StoredEntity>,
    pub tag_or_link_rows: Vec<StoredEntity>,
    pub title_rows: Vec<StoredEntity>,
    pub regions: Vec<RegionSummary>,
    pub region_entities: HashMap<String, Vec<StoredEntity>>,
    pub tags: Vec<TagSummary>,
    /// Directed edges (from_id, to_id, from_title, to_title).
    pub links: Vec<LinkRow>,
    pub fail_all: bool,
    /// Entity ids whose link queries fail (exercises per-edge degradation).
    pub failing_link_ids: Vec<String>,
}

impl MockStore {
    pub fn with_entities(entities: Vec<StoredEntity>) -> Self {
        Self {
            entities: entities.into_iter().map(|e| (e.id.clone(), e)).collect(),
            ..Default::default()
        }
    }

    pub fn add_link(&mut self, from: &StoredEntity, to: &StoredEntity) {
        self.links.push(LinkRow {
            from_id: from.id.clone(),
            to_id: to.id.clone(),
            from_title: from.title.clone(),
            to_title: to.title.clone(),
        });
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail_all {
            Err(StoreError::Unavailable {
                reason: "mock outage".into(),
            })
        } else {
            Ok(())
        }
    }
}

impl EntityStore for MockStore {
    fn similarity_query(
        &self,
        _vector: &[f32],
        _scope: &Scope,
        threshold: f64,
        limit: usize,
    ) -> StoreResult<Vec<(StoredEntity, f64)>> {
        self.check()?;
        Ok(self
            .similarity_rows
            .iter()
            .filter(|(_, s)| *s >= threshold)
            .take(limit)
            .cloned()
            .collect())
    }

    fn chunk_similarity_query(
        &self,
        _vector: &[f32],
        _scope: &Scope,
        threshold: f64,
        limit: usize,
    ) -> StoreResult<Vec<(StoredEntity, f64)>> {
        self.check()?;
        Ok(self
            .chunk_rows
            .iter()
            .filter(|(_, s)| *s >= threshold)
            .take(limit)
            .cloned()
            .collect())
    }

    fn lexical_query(
        &self,
        _text: &str,
        _scope: &Scope,
        limit: usize,
    ) -> StoreResult<Vec<StoredEntity>> {
        self.check()?;
        Ok(self.lexical_rows.iter().take(limit).cloned().collect())
    }

    fn by_tag_or_link(&self, _ids: &[String], _scope: &Scope) -> StoreResult<Vec<StoredEntity>> {
        self.check()?;
        Ok(self.tag_or_link_rows.clone())
    }

    fn fetch_by_id(&self, id: &str, _scope: &Scope) -> StoreResult<Option<StoredEntity>> {
        self.check()?;
        Ok(self.entities.get(id).cloned())
    }

    fn title_search(
        &self,
        tokens: &[String],
        _scope: &Scope,
        limit: usize,
    ) -> StoreResult<Vec<StoredEntity>> {
        self.check()?;
        Ok(self
            .title_rows
            .iter()
            .filter(|e| {
                let title = e.title.to_lowercase();
                tokens.iter().any(|t| title.contains(t.as_str()))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn entities_by_tags(&self, tags: &[String], _scope: &Scope) -> StoreResult<Vec<StoredEntity>> {
        self.check()?;
        let mut rows: Vec<StoredEntity> = self
            .entities
            .values()
            .filter(|e| e.tags.iter().any(|t| tags.contains(t)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rows)
    }

    fn entities_in_region(
        &self,
        region_id: &str,
        _scope: &Scope,
    ) -> StoreResult<Vec<StoredEntity>> {
        self.check()?;
        Ok(self
            .region_entities
            .get(region_id)
            .cloned()
            .unwrap_or_default())
    }

    fn region_summaries(&self, _scope: &Scope) -> StoreResult<Vec<RegionSummary>> {
        self.check()?;
        Ok(self.regions.clone())
    }

    fn tag_summaries(&self, _scope: &Scope) -> StoreResult<Vec<TagSummary>> {
        self.check()?;
        Ok(self.tags.clone())
    }
}

impl LinkStore for MockStore {
    fn outgoing_links(&self, entity_id: &str, _scope: &Scope) -> StoreResult<Vec<LinkRow>> {
        self.check()?;
        if self.failing_link_ids.iter().any(|id| id == entity_id) {
            return Err(StoreError::QueryFailed {
                reason: format!("link query failed for {entity_id}"),
            });
        }
        Ok(self
            .links
            .iter()
            .filter(|l| l.from_id == entity_id)
            .cloned()
            .collect())
    }

    fn incoming_links(&self, entity_id: &str, _scope: &Scope) -> StoreResult<Vec<LinkRow>> {
        self.check()?;
        if self.failing_link_ids.iter().any(|id| id == entity_id) {
            return Err(StoreError::QueryFailed {
                reason: format!("link query failed for {entity_id}"),
            });
        }
        Ok(self
            .links
            .iter()
            .filter(|l| l.to_id == entity_id)
            .cloned()
            .collect())
    }
}

/// Embedder returning a fixed vector, or failing when `fail` is set.
pub(crate) struct MockEmbedder {
    pub fail: bool,
}

impl Embedder for MockEmbedder {
    fn embed(&self, _text: &str) -> ServiceResult<Vec<f32>> {
        if self.fail {
            Err(ServiceError::Unavailable {
                reason: "embedder down".into(),
            })
        } else {
            Ok(vec![0.1, 0.2, 0.3])
        }
    }
}

/// Completion service returning a canned response.
pub(crate) struct MockCompletion {
    pub response: Result<String, ServiceError>,
}

impl CompletionService for MockCompletion {
    fn classify_or_complete(&self, _prompt: &str) -> ServiceResult<String> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(ServiceError::Unavailable {
                reason: e.to_string(),
            }),
        }
    }
}

/// Shorthand entity constructors.
pub(crate) fn note(id: &str, title: &str, content: &str) -> StoredEntity {
    StoredEntity {
        id: id.into(),
        title: title.into(),
        content: content.into(),
        kind: SourceKind::Note,
        tags: Vec::new(),
        created_at: None,
    }
}

pub(crate) fn chunk(id: &str, parent: &str, content: &str) -> StoredEntity {
    StoredEntity {
        id: id.into(),
        title: format!("{parent} chunk"),
        content: content.into(),
        kind: SourceKind::Chunk {
            parent_note_id: parent.into(),
        },
        tags: Vec::new(),
        created_at: None,
    }
}

pub(crate) fn image(id: &str, title: &str, tags: &[&str]) -> StoredEntity {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    StoredEntity {
        id: id.into(),
        title: title.into(),
        content: String::new(),
        kind: SourceKind::Image { tags: tags.clone() },
        tags,
        created_at: None,
    }
}
