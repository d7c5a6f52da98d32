use crate::judge::JudgeService;
use crate::model::Turn;
use crate::scoring::{self, ScoreReport};
use tracing::{debug, info};

pub(crate) async fn score_impl(
    svc: &JudgeService,
    turns: &[Turn],
    temperature: f64,
) -> anyhow::Result<ScoreReport> {
    let messages = super::prompt::build_messages(turns, svc.config.max_turn_chars);
    debug!(
        turns = turns.len() as u64,
        messages = messages.len() as u64,
        temperature,
        "requesting judge scores"
    );

    let text = super::client::call_judge_impl(svc, messages, temperature).await?;
    let report = scoring::coerce(&text);

    info!(
        model = %svc.config.model,
        fallback = report.is_fallback(),
        response_chars = text.chars().count() as u64,
        "judge scores ready"
    );
    Ok(report)
}
