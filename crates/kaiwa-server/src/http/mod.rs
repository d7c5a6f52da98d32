//! Router and handlers for the HTTP surface.

pub mod error;
pub mod handlers;
pub mod request;

use axum::routing::{get, post};
use axum::Router;
use kaiwa_core::JudgeService;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handlers::AnalyzeResponse;
pub use request::AnalyzeRequest;

#[derive(Clone)]
pub struct AppState {
    pub judge: Arc<JudgeService>,
}

impl AppState {
    pub fn new(judge: JudgeService) -> Self {
        Self {
            judge: Arc::new(judge),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/analyze", post(handlers::analyze_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
