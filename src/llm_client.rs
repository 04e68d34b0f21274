//! Text-generation capability consumed by agents

use crate::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Unified trait for LLM backends.
///
/// One instance is shared by every agent of a run, so implementations
/// must tolerate concurrent calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion for one system prompt and one user prompt.
    ///
    /// An empty string means the backend answered without text. Transport and
    /// API problems are errors. Implementations should return
    /// [`Error::Cancelled`](crate::Error::Cancelled) once `cancel` fires.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String>;

    /// Get the client type for debugging/logging
    fn client_type(&self) -> &str;

    /// Get the base URL or endpoint
    fn endpoint(&self) -> &str;
}
