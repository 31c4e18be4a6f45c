/// Errors from the external embedding and completion services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("service call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("invalid service response: {reason}")]
    InvalidResponse { reason: String },
}
