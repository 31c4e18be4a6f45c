//! Shared in-memory fixtures for integration tests.

use std::collections::HashMap;

use trellis_core::errors::{ServiceError, StoreError};
use trellis_core::models::{
    LinkRow, RegionSummary, Scope, SourceKind, StoredEntity, TagSummary,
};
use trellis_core::traits::{
    CompletionService, Embedder, EntityStore, LinkStore, ServiceResult, StoreResult,
};

/// In-memory knowledge base implementing every store trait.
#[derive(Default)]
pub struct MemoryBase {
    pub entities: HashMap<String, StoredEntity>,
    pub similarity_rows: Vec<(StoredEntity, f64)>,
    pub chunk_rows: Vec<(StoredEntity, f64)>,
    pub lexical_rows: Vec<StoredEntity>,
    pub tag_or_link_rows: Vec<StoredEntity>,
    pub title_rows: Vec<StoredEntity>,
    pub regions: Vec<RegionSummary>,
    pub region_entities: HashMap<String, Vec<StoredEntity>>,
    pub tag_list: Vec<TagSummary>,
    pub links: Vec<LinkRow>,
    pub fail_all: bool,
}

impl MemoryBase {
    pub fn insert(&mut self, entity: StoredEntity) {
        self.entities.insert(entity.id.clone(), entity);
    }

    pub fn link(&mut self, from: &StoredEntity, to: &StoredEntity) {
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
                reason: "outage".into(),
            })
        } else {
            Ok(())
        }
    }
}

impl EntityStore for MemoryBase {
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
        Ok(self.tag_list.clone())
    }
}

impl LinkStore for MemoryBase {
    fn outgoing_links(&self, entity_id: &str, _scope: &Scope) -> StoreResult<Vec<LinkRow>> {
        self.check()?;
        Ok(self
            .links
            .iter()
            .filter(|l| l.from_id == entity_id)
            .cloned()
            .collect())
    }

    fn incoming_links(&self, entity_id: &str, _scope: &Scope) -> StoreResult<Vec<LinkRow>> {
        self.check()?;
        Ok(self
            .links
            .iter()
            .filter(|l| l.to_id == entity_id)
            .cloned()
            .collect())
    }
}

pub struct FixedEmbedder;

impl Embedder for FixedEmbedder {
    fn embed(&self, _text: &str) -> ServiceResult<Vec<f32>> {
        Ok(vec![0.5, 0.5, 0.5])
    }
}

pub struct CannedCompletion {
    pub response: Result<String, String>,
}

impl CompletionService for CannedCompletion {
    fn classify_or_complete(&self, _prompt: &str) -> ServiceResult<String> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(reason) => Err(ServiceError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }
}

pub fn note(id: &str, title: &str, content: &str) -> StoredEntity {
    StoredEntity {
        id: id.into(),
        title: title.into(),
        content: content.into(),
        kind: SourceKind::Note,
        tags: Vec::new(),
        created_at: None,
    }
}

pub fn chunk(id: &str, parent: &str, content: &str) -> StoredEntity {
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
