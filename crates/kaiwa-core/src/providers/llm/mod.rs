pub mod openai;
pub mod tracing;

use crate::model::{ChatRequest, LlmResponse};
use async_trait::async_trait;

pub use openai::{OpenAIClient, OpenAIConfig};
pub use self::tracing::TracingLlmClient;

/// A chat-completions backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}
