//! Error taxonomy for the Trellis retrieval engine.
//!
//! Per-subsystem enums aggregate into [`TrellisError`]. Retrieval sources
//! catch `StoreError`/`ServiceError` at the source boundary and degrade to
//! empty contributions; only whole-pipeline failures escape as errors.

mod retrieval_error;
mod service_error;
mod store_error;

pub use retrieval_error::RetrievalError;
pub use service_error::ServiceError;
pub use store_error::StoreError;

/// Top-level error type for the Trellis workspace.
#[derive(Debug, thiserror::Error)]
pub enum TrellisError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type TrellisResult<T> = Result<T, TrellisError>;
