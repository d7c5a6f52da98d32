use clap::{Parser, ValueEnum};
use kaiwa_core::judge::{DEFAULT_MAX_TURN_CHARS, DEFAULT_MODEL};
use kaiwa_core::providers::llm::openai::DEFAULT_BASE_URL;
use kaiwa_core::providers::llm::OpenAIConfig;
use kaiwa_core::JudgeRuntimeConfig;
use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Startup configuration. Every flag can also come from the environment (or `.env`).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "kaiwa-server",
    version,
    about = "Scores pasted chat transcripts for fluency, coherence, complexity, engagement and frustration"
)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, env = "KAIWA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Chat model used for scoring
    #[arg(long, env = "KAIWA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "KAIWA_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl ServerArgs {
    pub fn judge_config(&self) -> JudgeRuntimeConfig {
        JudgeRuntimeConfig {
            model: self.model.clone(),
            max_turn_chars: DEFAULT_MAX_TURN_CHARS,
        }
    }

    pub fn openai_config(&self) -> OpenAIConfig {
        OpenAIConfig::new(self.api_key.clone()).with_base_url(self.openai_base_url.clone())
    }
}
