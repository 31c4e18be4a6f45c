/// Retrieval pipeline errors.
///
/// An empty result set is NOT an error — it is returned as a valid outcome
/// with zero citations. These variants cover infrastructure failure only,
/// so a caller can distinguish "nothing matched" from "nothing was searched".
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("all {attempted} retrieval sources failed")]
    AllSourcesFailed { attempted: usize },

    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },
}
