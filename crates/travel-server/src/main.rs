//! Ahadu Travel static host
//!
//! Serves the compiled WASM frontend and answers deep links such as
//! `/blog/lalibela-at-dawn` with the SPA shell so client-side routing works
//! on reload.

mod config;
mod handlers;
mod state;

use axum::{Router, routing::{MethodRouter, get}};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{health_check, spa_shell};
use crate::state::AppState;

fn build_router(state: AppState) -> Router {
    let shell: MethodRouter = get(spa_shell).with_state(state.clone());
    let assets = ServeDir::new(&state.config.static_dir).fallback(shell);

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    if config.index_path().exists() {
        tracing::info!("✓ Serving frontend from {}", config.static_dir.display());
    } else {
        tracing::warn!("⚠ {} not found - build the frontend first", config.index_path().display());
        tracing::warn!("  trunk build --release crates/travel-web/index.html --dist dist");
    }
    tracing::info!("Content API: {}", config.api.base_url);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Ahadu Travel running on http://{}", config.bind_addr);

    axum::serve(listener, build_router(AppState::new(config))).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    const SHELL: &str = "<!DOCTYPE html><html><body></body></html>";

    fn bundle_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("travel-server-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), SHELL).unwrap();
        std::fs::write(dir.join("app.js"), "console.log('ahadu')").unwrap();
        dir
    }

    fn app(static_dir: PathBuf) -> Router {
        build_router(AppState::new(ServerConfig {
            static_dir,
            ..ServerConfig::default()
        }))
    }

    async fn get_path(app: &Router, path: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_client_routes_get_shell() {
        let app = app(bundle_dir());
        for path in ["/", "/services", "/blog", "/blog/lalibela-at-dawn", "/appointment"] {
            let (status, body) = get_path(&app, path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, SHELL, "{path}");
        }
    }

    #[tokio::test]
    async fn test_assets_and_unknown_paths() {
        let app = app(bundle_dir());

        let (status, body) = get_path(&app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ahadu"));

        let (status, body) = get_path(&app, "/pricing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, SHELL);
    }

    #[tokio::test]
    async fn test_health_reports_missing_bundle() {
        let app = app(std::env::temp_dir().join(format!("missing-{}", uuid::Uuid::new_v4())));

        let (status, body) = get_path(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "degraded");
        assert_eq!(health["shell_present"], false);

        let (status, _) = get_path(&app, "/blog").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
