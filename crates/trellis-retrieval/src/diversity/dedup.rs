//! Duplicate-entity collapse.
//!
//! Notes and their chunks collapse to one survivor per parent entity (first
//! occurrence wins, i.e. prior sort order decides). Document chunks are
//! bounded per document with a quality gate, then reordered into natural
//! document position within the slots they occupy.

use std::collections::{HashMap, HashSet};

use trellis_core::config::RetrievalConfig;
use trellis_core::models::{reassign_ranks, RankedResult, SourceKind};

pub fn apply(ranked: Vec<RankedResult>, config: &RetrievalConfig) -> Vec<RankedResult> {
    let gate = config.effective_quality_gate();

    let mut seen_parents: HashSet<String> = HashSet::new();
    // document_id → (kept count, top chunk score).
    let mut documents: HashMap<String, (usize, f64)> = HashMap::new();
    let mut kept: Vec<RankedResult> = Vec::new();

    for r in ranked {
        match &r.result.kind {
            SourceKind::Note | SourceKind::Chunk { .. } => {
                let parent = r
                    .result
                    .kind
                    .parent_note_id()
                    .unwrap_or(&r.result.source_id)
                    .to_string();
                if seen_parents.insert(parent) {
                    kept.push(r);
                }
            }
            SourceKind::DocumentChunk { document_id, .. } => {
                let entry = documents.entry(document_id.clone()).or_insert((0, 0.0));
                if entry.0 == 0 {
                    // First (best-ranked) chunk sets the document's bar.
                    *entry = (1, r.final_score);
                    kept.push(r);
                } else if entry.0 < config.max_chunks_per_document
                    && r.final_score >= gate * entry.1
                {
                    entry.0 += 1;
                    kept.push(r);
                }
            }
            SourceKind::Image { .. } => kept.push(r),
        }
    }

    reorder_document_chunks(&mut kept);
    reassign_ranks(&mut kept);
    kept
}

/// Same-document chunks swap into natural document position (page/sequence
/// index) within the list slots they already occupy; every other result
/// keeps its fused position.
fn reorder_document_chunks(kept: &mut [RankedResult]) {
    let mut slots_by_doc: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, r) in kept.iter().enumerate() {
        if let Some(doc) = r.result.kind.document_id() {
            slots_by_doc.entry(doc.to_string()).or_default().push(i);
        }
    }

    for slots in slots_by_doc.values() {
        if slots.len() < 2 {
            continue;
        }
        let mut chunks: Vec<RankedResult> = slots.iter().map(|&i| kept[i].clone()).collect();
        chunks.sort_by_key(|r| match &r.result.kind {
            SourceKind::DocumentChunk { position, .. } => *position,
            _ => u32::MAX,
        });
        for (&slot, chunk) in slots.iter().zip(chunks) {
            kept[slot] = chunk;
        }
    }
}
