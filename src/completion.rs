use async_trait::async_trait;
use thiserror::Error;

/// Text generation from a system instruction and a user instruction.
///
/// Implementors own transport and provider wire details; callers only see the
/// generated text or a [`CompletionError`].
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,
    #[error("failed to reach completion provider: {0}")]
    Transport(String),
    #[error("completion provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("malformed completion response: {0}")]
    Malformed(String),
    #[error("completion provider returned an empty response")]
    EmptyResponse,
}
