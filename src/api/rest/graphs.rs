//! Graph collection endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::store_error_response;
use crate::api::state::AppState;
use crate::types::Graph;

/// Request body for creating or renaming a graph
#[derive(Debug, Deserialize)]
pub struct GraphModel {
    pub name: String,
}

/// Response for a created graph
#[derive(Debug, Serialize)]
pub struct CreatedGraph {
    pub id: usize,
    pub name: String,
}

/// GET /api/graphs - List all graphs
pub async fn list_graphs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let graphs: Vec<Graph> = state.store.list_graphs();
    Json(graphs)
}

/// POST /api/graphs - Create a new empty graph
pub async fn create_graph(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GraphModel>,
) -> impl IntoResponse {
    match state.store.create_graph(&body.name) {
        Ok(id) => (
            StatusCode::CREATED,
            Json(CreatedGraph {
                id,
                name: body.name,
            }),
        )
            .into_response(),
        Err(e) => store_error_response(e),
    }
}

/// GET /api/graphs/:id - Get one graph
pub async fn get_graph(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> impl IntoResponse {
    match state.store.get_graph(id) {
        Ok(graph) => Json(graph).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// PATCH /api/graphs/:id - Rename a graph
pub async fn rename_graph(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
    Json(body): Json<GraphModel>,
) -> impl IntoResponse {
    match state.store.rename_graph(id, &body.name) {
        Ok(()) => Json(json!({ "message": "Graph renamed" })).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// DELETE /api/graphs/:id - Delete a graph
///
/// Ids are list indices, so graphs after the deleted one shift down; any
/// running autosave flushers are dropped since their bindings no longer
/// apply.
pub async fn delete_graph(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> impl IntoResponse {
    match state.store.delete_graph(id) {
        Ok(()) => {
            state.autosave.reset();
            Json(json!({ "message": "Graph deleted" })).into_response()
        }
        Err(e) => store_error_response(e),
    }
}
