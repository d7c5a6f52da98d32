//! Transcript segmentation and rubric scoring for Kaiwa.
//!
//! The pipeline for one pasted transcript:
//!
//! 1. [`transcript::segment`] splits the text into [`Turn`]s.
//! 2. [`JudgeService::score`] sends the turns to a chat model with a fixed
//!    five-metric rubric.
//! 3. [`scoring::coerce`] reads the model's free-form answer into a
//!    [`ScoreReport`], falling back to null scores when it cannot.
//!
//! ```no_run
//! use kaiwa_core::providers::llm::{OpenAIClient, OpenAIConfig, TracingLlmClient};
//! use kaiwa_core::{transcript, JudgeRuntimeConfig, JudgeService};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let openai = OpenAIClient::new(OpenAIConfig::new("sk-..."))?;
//! let client = Arc::new(TracingLlmClient::new(Arc::new(openai)));
//! let judge = JudgeService::new(JudgeRuntimeConfig::default(), client);
//!
//! let turns = transcript::segment("You said:\nこんにちは\nChatGPT said:\nこんにちは！");
//! let report = judge.score(&turns, 0.0).await?;
//! println!("{}", serde_json::to_string(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod judge;
pub mod model;
pub mod providers;
pub mod scoring;
pub mod transcript;

pub use errors::ProviderError;
pub use judge::{JudgeRuntimeConfig, JudgeService};
pub use model::{ChatMessage, ChatRequest, ChatRole, LlmResponse, Role, Turn};
pub use scoring::{Metric, MetricScore, ScoreReport};
