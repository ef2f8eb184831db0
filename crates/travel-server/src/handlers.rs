//! HTTP Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use travel_core::Route;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub api_base: String,
    pub shell_present: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let shell_present = tokio::fs::try_exists(state.index_path())
        .await
        .unwrap_or(false);

    Json(HealthResponse {
        status: if shell_present { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        api_base: state.config.api.base_url.clone(),
        shell_present,
    })
}

/// Answer paths that are not files with the SPA shell
///
/// Client routes (`/blog/:slug` and friends) get `200`; anything else gets
/// `404` with the same shell, which renders the not-found page.
pub async fn spa_shell(State(state): State<AppState>, uri: Uri) -> Response {
    let status = if Route::parse(uri.path()).is_some() {
        StatusCode::OK
    } else {
        tracing::debug!("No client route for {}", uri.path());
        StatusCode::NOT_FOUND
    };

    let index = state.index_path();
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Cannot read SPA shell {}: {}", index.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Frontend bundle not found".into(),
                    code: "SHELL_MISSING".into(),
                }),
            )
                .into_response()
        }
    }
}
