//! Completion interface shared by the command layer and provider clients.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Http error (e.g.: connection error, timeout, etc.)
    #[error("HttpError: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Json error (e.g.: serialization, deserialization)
    #[error("JsonError: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing the completion response
    #[error("ResponseError: {0}")]
    ResponseError(String),

    /// Error returned by the completion model provider
    #[error("ProviderError: {0}")]
    ProviderError(String),
}

/// Trait defining a completion model that can rewrite a prompt.
/// Implemented by [`crate::openai::CompletionModel`]; the command layer only
/// depends on this trait so tests can substitute a canned model.
pub trait CompletionModel: Send + Sync {
    /// Generates the rewritten form of `prompt`.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}
