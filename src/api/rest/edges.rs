//! Edge endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::store_error_response;
use crate::api::state::AppState;
use crate::types::{default_style, default_true, Edge};

/// Request body for creating an edge
#[derive(Debug, Deserialize)]
pub struct EdgeModel {
    pub start_node: String,
    pub end_node: String,
    #[serde(default = "default_true")]
    pub directed: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_style")]
    pub style: String,
}

/// Request body for updating an edge's description and style
#[derive(Debug, Deserialize)]
pub struct EdgeUpdateModel {
    pub start_node: String,
    pub end_node: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Query parameters identifying the edge to delete
#[derive(Debug, Deserialize)]
pub struct DeleteEdgeParams {
    pub start_node: String,
    pub end_node: String,
}

/// GET /api/graphs/:id/edges - List a graph's edges
pub async fn list_edges(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> impl IntoResponse {
    match state.store.get_graph(id) {
        Ok(graph) => Json(graph.edges).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// POST /api/graphs/:id/edges - Create an edge between existing nodes
pub async fn create_edge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
    Json(body): Json<EdgeModel>,
) -> impl IntoResponse {
    let edge = Edge {
        start: body.start_node,
        end: body.end_node,
        directed: body.directed,
        description: body.description,
        style: body.style,
    };

    match state.store.add_edge(id, edge) {
        Ok(edge) => (StatusCode::CREATED, Json(edge)).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// PATCH /api/graphs/:id/edges - Update an edge's description/style
pub async fn update_edge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
    Json(body): Json<EdgeUpdateModel>,
) -> impl IntoResponse {
    match state.store.update_edge(
        id,
        &body.start_node,
        &body.end_node,
        body.description,
        body.style,
    ) {
        Ok(edge) => Json(edge).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// DELETE /api/graphs/:id/edges?start_node=A&end_node=B - Delete an edge
pub async fn delete_edge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
    Query(params): Query<DeleteEdgeParams>,
) -> impl IntoResponse {
    match state.store.delete_edge(id, &params.start_node, &params.end_node) {
        Ok(()) => Json(json!({ "message": "Edge deleted" })).into_response(),
        Err(e) => store_error_response(e),
    }
}
