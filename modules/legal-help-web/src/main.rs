use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use legal_help_cases::LlmCaseWriter;
use legal_help_common::Config;
use legal_help_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("legal_help=info".parse()?))
        .init();

    let config = Config::from_env()?;

    let writer = Arc::new(LlmCaseWriter::from_config(&config));
    info!(model = %writer.model(), "Case writer ready");

    let state = Arc::new(AppState::new(writer, &config));
    spawn_session_pruner(state.clone());

    let app = build_router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Legal Help Case Assistant starting on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Sweep idle sessions in the background so the store stays bounded by the
/// number of active users.
fn spawn_session_pruner(state: Arc<AppState>) {
    let period = state.sessions.ttl().min(Duration::from_secs(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            state.sessions.prune_expired(Instant::now()).await;
        }
    });
}
