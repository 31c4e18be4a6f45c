use serde::{Deserialize, Serialize};

/// Direction of a traversed link edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkDirection {
    Forward,
    Back,
}

/// One traversed edge, chained to explain multi-hop provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLink {
    pub direction: LinkDirection,
    pub from_id: String,
    pub to_id: String,
    pub from_title: String,
    pub to_title: String,
}

impl RelationshipLink {
    /// Human-readable arrow used in context headers. `from`/`to` always name
    /// the stored edge; a backlink is rendered from the traversal's point of
    /// view, e.g. `"A" ← "C"` for edge C→A reached from A.
    pub fn describe(&self) -> String {
        match self.direction {
            LinkDirection::Forward => format!("\"{}\" → \"{}\"", self.from_title, self.to_title),
            LinkDirection::Back => format!("\"{}\" ← \"{}\"", self.to_title, self.from_title),
        }
    }
}
