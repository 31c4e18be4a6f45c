use serde::{Deserialize, Serialize};

/// The kind of entity a retrieval result points at.
///
/// Tagged per kind so chunk parentage, image tags, and document position
/// travel with the result instead of living in an untyped metadata map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A whole note.
    Note,
    /// A chunk of a note; carries its parent so dedup can collapse pairs.
    Chunk { parent_note_id: String },
    /// An image entity with its assigned tags.
    Image { tags: Vec<String> },
    /// A chunk of a linked document, with its position (page/sequence index).
    DocumentChunk { document_id: String, position: u32 },
}

impl SourceKind {
    /// Stable lowercase discriminant used in dedup keys and breakdown maps.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Note => "note",
            SourceKind::Chunk { .. } => "chunk",
            SourceKind::Image { .. } => "image",
            SourceKind::DocumentChunk { .. } => "document_chunk",
        }
    }

    /// The parent entity a note-chunk result collapses into, if any.
    pub fn parent_note_id(&self) -> Option<&str> {
        match self {
            SourceKind::Chunk { parent_note_id } => Some(parent_note_id),
            _ => None,
        }
    }

    /// The owning document for a document chunk, if any.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            SourceKind::DocumentChunk { document_id, .. } => Some(document_id),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, SourceKind::Image { .. })
    }
}
