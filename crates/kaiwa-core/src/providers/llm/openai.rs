use super::LlmClient;
use crate::errors::ProviderError;
use crate::model::{ChatRequest, LlmResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::{json, Value};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const PROVIDER: &str = "openai";
const USER_AGENT_VALUE: &str = concat!("kaiwa/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix.
    pub base_url: String,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    config: OpenAIConfig,
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Config {
                message: "OpenAI API key is empty".to_string(),
            });
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        // No timeout: a slow provider makes the request slow.
        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| ProviderError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, request: &ChatRequest) -> anyhow::Result<LlmResponse> {
        let url = self.completions_url();
        debug!(
            url = %url,
            model = %request.model,
            messages = request.messages.len() as u64,
            "sending chat completion"
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(ProviderError::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse {
                message: format!("failed to parse chat completion: {}", e),
            })?;

        let text = extract_text(&body)?;
        let model = body
            .get("model")
            .and_then(Value::as_str)
            .unwrap_or(&request.model)
            .to_string();

        Ok(LlmResponse {
            text,
            provider: PROVIDER.to_string(),
            model,
            meta: json!({ "usage": body.get("usage").cloned().unwrap_or(Value::Null) }),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

/// `choices[0].message.content`, trimmed. No choices at all reads as empty text.
fn extract_text(body: &Value) -> Result<String, ProviderError> {
    let Some(choice) = body.pointer("/choices/0") else {
        return Ok(String::new());
    };
    choice
        .pointer("/message/content")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| ProviderError::MissingContent {
            provider: PROVIDER.to_string(),
        })
}
