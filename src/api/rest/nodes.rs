//! Node endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::{decode_name, store_error_response};
use crate::api::state::AppState;
use crate::flusher::DirtyEntry;
use crate::store::NodePatch;
use crate::types::{default_category, Node};

/// Request body for creating a node
#[derive(Debug, Deserialize)]
pub struct NodeModel {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub position_x: Option<f64>,
    #[serde(default)]
    pub position_y: Option<f64>,
}

/// One node's new position in a batch update
#[derive(Debug, Deserialize)]
pub struct NodePositionModel {
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
}

/// Request body for the batch position update
#[derive(Debug, Deserialize)]
pub struct NodesModel {
    pub nodes: Vec<NodePositionModel>,
}

/// Request body for updating a node; absent fields are unchanged, an empty
/// `parent` string ungroups the node
#[derive(Debug, Deserialize)]
pub struct NodeUpdateModel {
    #[serde(default)]
    pub new_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
}

/// GET /api/graphs/:id/nodes - List a graph's nodes
pub async fn list_nodes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> impl IntoResponse {
    match state.store.get_graph(id) {
        Ok(graph) => Json(graph.nodes).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// POST /api/graphs/:id/nodes - Create a node
pub async fn create_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
    Json(body): Json<NodeModel>,
) -> impl IntoResponse {
    let mut node = Node::with_category(body.name, body.category);
    node.position_x = body.position_x.filter(|v| v.is_finite()).map(|v| v.floor() as i64);
    node.position_y = body.position_y.filter(|v| v.is_finite()).map(|v| v.floor() as i64);

    match state.store.add_node(id, node) {
        Ok(node) => (StatusCode::CREATED, Json(node)).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// PATCH /api/graphs/:id/nodes - Batch position update
///
/// Applies the new coordinates to the store immediately (floored to
/// integers), then feeds them to the graph's autosave flusher so the disk
/// write happens once the drag burst settles.
pub async fn update_positions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
    Json(body): Json<NodesModel>,
) -> impl IntoResponse {
    let entries: Vec<DirtyEntry> = body
        .nodes
        .iter()
        .filter(|n| n.position_x.is_finite() && n.position_y.is_finite())
        .map(|n| DirtyEntry::new(n.name.as_str(), n.position_x.floor() as i64, n.position_y.floor() as i64))
        .collect();

    match state.store.update_positions(id, &entries) {
        Ok(()) => {
            state.autosave.record_moves(id, &entries).await;
            Json(json!({ "message": "Nodes updated" })).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// PATCH /api/graphs/:id/nodes/:name - Update one node
pub async fn update_node(
    State(state): State<Arc<AppState>>,
    Path((id, name)): Path<(usize, String)>,
    Json(body): Json<NodeUpdateModel>,
) -> impl IntoResponse {
    let name = decode_name(&name);
    let patch = NodePatch {
        new_name: body.new_name,
        category: body.category,
        parent: body.parent,
    };

    match state.store.update_node(id, &name, patch) {
        Ok(node) => Json(node).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// DELETE /api/graphs/:id/nodes/:name - Delete a node and its edges
pub async fn delete_node(
    State(state): State<Arc<AppState>>,
    Path((id, name)): Path<(usize, String)>,
) -> impl IntoResponse {
    let name = decode_name(&name);
    match state.store.delete_node(id, &name) {
        Ok(()) => Json(json!({ "message": "Node deleted" })).into_response(),
        Err(e) => store_error_response(e),
    }
}
