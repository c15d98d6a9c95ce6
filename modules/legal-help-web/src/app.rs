use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use uuid::Uuid;

use legal_help_cases::CaseWriter;
use legal_help_common::Config;

use crate::pages;
use crate::session::SessionStore;

pub struct AppState {
    pub writer: Arc<dyn CaseWriter>,
    pub sessions: SessionStore,
    pub session_secret: Arc<str>,
    pub api_key_configured: bool,
}

impl AppState {
    pub fn new(writer: Arc<dyn CaseWriter>, config: &Config) -> Self {
        // Without a configured secret, sign with a per-process random key.
        // Sessions live in memory, so nothing outlives the process anyway.
        let session_secret = config
            .session_secret
            .clone()
            .unwrap_or_else(|| format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple()));

        Self {
            writer,
            sessions: SessionStore::new(config.session_ttl),
            session_secret: Arc::from(session_secret),
            api_key_configured: config.has_api_key(),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Screens
        .route("/", get(pages::home_page))
        .route("/home", get(pages::home_page).post(pages::home_submit))
        .route("/case", get(pages::case_page).post(pages::case_submit))
        .route("/analysis", get(pages::analysis_page))
        .route("/analysis/close", post(pages::analysis_close))
        // Reference data for the dependent city dropdown
        .route("/api/regions/{region}/localities", get(pages::api_localities))
        // Health check
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        // Pages carry per-session case text: never cache
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only (no query params, no form bodies)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
