use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use gapp_directory::directory::{
    directory_router, DirectoryService, ListingRequestStore, ProviderStore,
};
use gapp_directory::screener::{screener_router, ScreenerEngine};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_directory_routes<P, L>(
    directory: Arc<DirectoryService<P, L>>,
    screener: Arc<ScreenerEngine>,
) -> axum::Router
where
    P: ProviderStore + 'static,
    L: ListingRequestStore + 'static,
{
    directory_router(directory)
        .merge(screener_router(screener))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
