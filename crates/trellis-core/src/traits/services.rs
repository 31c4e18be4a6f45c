use crate::errors::ServiceError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Black-box embedding generator. May fail; the pipeline degrades to
/// lexical-only retrieval when it does.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> ServiceResult<Vec<f32>>;
}

/// Lightweight external completion/classification service.
///
/// Used only by the graph navigator. Its output is never trusted: the
/// response is parsed strictly and any malformed shape becomes an empty plan.
pub trait CompletionService: Send + Sync {
    fn classify_or_complete(&self, prompt: &str) -> ServiceResult<String>;
}
