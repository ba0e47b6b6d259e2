use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::ScreenerState;
use super::wizard::{apply_action, ScreenerAction};
use super::ScreenerEngine;

/// Router builder exposing the screener wizard endpoints.
pub fn screener_router(engine: Arc<ScreenerEngine>) -> Router {
    Router::new()
        .route("/api/v1/screener/transition", post(transition_handler))
        .route("/api/v1/screener/results", post(results_handler))
        .route("/api/v1/screener/catalog", get(catalog_handler))
        .with_state(engine)
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    #[serde(default)]
    pub state: ScreenerState,
    pub action: ScreenerAction,
}

pub(crate) async fn transition_handler(
    State(engine): State<Arc<ScreenerEngine>>,
    Json(request): Json<TransitionRequest>,
) -> Response {
    let transition = apply_action(request.state, request.action, &engine);
    (StatusCode::OK, Json(transition)).into_response()
}

pub(crate) async fn results_handler(
    State(engine): State<Arc<ScreenerEngine>>,
    Json(state): Json<ScreenerState>,
) -> Response {
    (StatusCode::OK, Json(engine.evaluate(&state))).into_response()
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<ScreenerEngine>>) -> Response {
    (StatusCode::OK, Json(engine.catalog().clone())).into_response()
}
