/// Entity/link store errors surfaced by storage trait implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("entity not found: {id}")]
    NotFound { id: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("store operation timed out: {operation}")]
    Timeout { operation: String },
}
