use crate::model::{ChatRequest, LlmResponse};
use crate::providers::llm::LlmClient;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{field, info_span, Instrument, Span};

/// Wraps a client in a `gen_ai.client.request` span.
///
/// Only sizes, model names and latency are recorded; message content never is.
pub struct TracingLlmClient {
    inner: Arc<dyn LlmClient>,
}

impl TracingLlmClient {
    pub fn new(inner: Arc<dyn LlmClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LlmClient for TracingLlmClient {
    async fn complete(&self, request: &ChatRequest) -> anyhow::Result<LlmResponse> {
        let span = info_span!(
            "gen_ai.client.request",
            "gen_ai.system" = self.inner.provider_name(),
            "gen_ai.request.model" = request.model.as_str(),
            "gen_ai.request.temperature" = request.temperature,
            "kaiwa.messages" = request.messages.len() as u64,
            "gen_ai.response.model" = field::Empty,
            "kaiwa.response_chars" = field::Empty,
            "kaiwa.latency_ms" = field::Empty,
            "error" = field::Empty,
            "error.message" = field::Empty
        );

        async move {
            let start = Instant::now();
            let result = self.inner.complete(request).await;

            let span = Span::current();
            span.record("kaiwa.latency_ms", start.elapsed().as_millis() as u64);
            match &result {
                Ok(resp) => {
                    span.record("gen_ai.response.model", resp.model.as_str());
                    span.record("kaiwa.response_chars", resp.text.chars().count() as u64);
                }
                Err(e) => {
                    span.record("error", true);
                    span.record("error.message", e.to_string().as_str());
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}
