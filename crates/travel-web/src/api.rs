//! API Client glue
//!
//! Pages own their data; this module only runs the request and delivers the
//! result to a signal, if that signal still exists.

use std::future::Future;
use std::sync::OnceLock;

use leptos::prelude::*;
use leptos::task::spawn_local;
use travel_client::HttpContentApi;
use travel_core::ApiConfig;

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Content API client for the configured backend
pub fn content_api() -> HttpContentApi {
    let config = CONFIG.get_or_init(|| {
        let config = ApiConfig::from_env();
        tracing::info!("Content API at {}", config.base_url);
        config
    });
    HttpContentApi::new(config.clone())
}

/// Run `load` and store its result in `target`
///
/// If the page owning `target` was torn down in the meantime the result is
/// dropped instead of written.
pub fn spawn_load<T, F, Fut>(target: RwSignal<T>, load: F)
where
    T: Send + Sync + 'static,
    F: FnOnce(HttpContentApi) -> Fut + 'static,
    Fut: Future<Output = T> + 'static,
{
    spawn_local(async move {
        let value = load(content_api()).await;
        if target.try_set(value).is_some() {
            tracing::debug!("Page unmounted before its data arrived; dropping response");
        }
    });
}
