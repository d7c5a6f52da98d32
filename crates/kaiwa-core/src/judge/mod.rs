mod judge_internal;

use crate::model::Turn;
use crate::providers::llm::LlmClient;
use crate::scoring::ScoreReport;
use std::sync::Arc;

pub use judge_internal::prompt::{build_messages, DEVELOPER_TEXT, INPUT_TEXT};

pub const DEFAULT_MODEL: &str = "gpt-4.1";
pub const DEFAULT_MAX_TURN_CHARS: usize = 3000;

#[derive(Clone, Debug)]
pub struct JudgeRuntimeConfig {
    pub model: String,
    /// Per-turn character cap applied before transmission.
    pub max_turn_chars: usize,
}

impl Default for JudgeRuntimeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_turn_chars: DEFAULT_MAX_TURN_CHARS,
        }
    }
}

/// Scores segmented transcripts with one model call per transcript.
#[derive(Clone)]
pub struct JudgeService {
    config: JudgeRuntimeConfig,
    client: Arc<dyn LlmClient>,
}

impl JudgeService {
    pub fn new(config: JudgeRuntimeConfig, client: Arc<dyn LlmClient>) -> Self {
        Self { config, client }
    }

    /// Ask the model to grade `turns` and coerce whatever it answers.
    ///
    /// Provider failures are returned as-is; unreadable answers are not errors.
    pub async fn score(&self, turns: &[Turn], temperature: f64) -> anyhow::Result<ScoreReport> {
        judge_internal::run::score_impl(self, turns, temperature).await
    }
}
