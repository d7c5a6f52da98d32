use anyhow::Context;
use clap::Parser;
use kaiwa_core::providers::llm::{OpenAIClient, TracingLlmClient};
use kaiwa_core::JudgeService;
use kaiwa_server::{build_router, logging, AppState, ServerArgs};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads env fallbacks.
    let dotenv = dotenvy::dotenv();
    let args = ServerArgs::parse();
    logging::init(args.log_format)?;
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "loaded .env");
    }

    let openai = OpenAIClient::new(args.openai_config()).context("failed to build OpenAI client")?;
    let client = Arc::new(TracingLlmClient::new(Arc::new(openai)));
    let judge = JudgeService::new(args.judge_config(), client);
    let app = build_router(AppState::new(judge));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(addr = %args.bind, model = %args.model, "kaiwa-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("kaiwa-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
