use super::error::ApiError;
use super::request::AnalyzeRequest;
use super::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use kaiwa_core::{transcript, ScoreReport, Turn};
use serde::Serialize;
use tracing::info;

static INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub scores: ScoreReport,
    pub turns: Vec<Turn>,
    pub temperature: f64,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /analyze`. The body is read raw so any `Content-Type` is accepted.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let req = AnalyzeRequest::parse(&body)?;
    let turns = transcript::segment(&req.transcript);
    info!(
        transcript_chars = req.transcript.chars().count(),
        turns = turns.len(),
        temperature = req.temperature,
        "analyze request"
    );

    let scores = state
        .judge
        .score(&turns, req.temperature)
        .await
        .map_err(ApiError::Upstream)?;

    Ok(Json(AnalyzeResponse {
        scores,
        turns,
        temperature: req.temperature,
    }))
}
