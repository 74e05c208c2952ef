//! UI config and persistence endpoints

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use super::store_error_response;
use crate::api::state::AppState;

/// GET /api/config - UI configuration for clients
///
/// Served read-only from the document loaded at startup.
pub async fn get_ui_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.ui_config.clone())
}

/// POST /api/utils/save - Persist all graphs to disk now
pub async fn save_graphs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.persist() {
        Ok(()) => Json("success").into_response(),
        Err(e) => store_error_response(e),
    }
}
