//! API tests against the full router

use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use irgraph::api::http::create_router;
use irgraph::api::state::AppState;
use irgraph::config::UiConfig;
use irgraph::store::GraphStore;

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_app() -> (Router, String) {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let temp_file = format!("test_api_{}_{}.json", std::process::id(), id);

    let store = Arc::new(GraphStore::open(temp_file.clone()));
    let state = Arc::new(AppState::new(
        store,
        UiConfig::default(),
        Duration::from_millis(20),
    ));
    (create_router(state), temp_file)
}

fn cleanup(file_path: &str) {
    let _ = fs::remove_file(file_path);
}

async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_list_graphs_empty() {
    let (app, temp_file) = test_app();

    let (status, body) = request(&app, Method::GET, "/api/graphs", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_create_and_get_graph() {
    let (app, temp_file) = test_app();

    let (status, body) =
        request(&app, Method::POST, "/api/graphs", Some(json!({"name": "NewGraph"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 0);
    assert_eq!(body["name"], "NewGraph");

    let (status, body) = request(&app, Method::GET, "/api/graphs/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "NewGraph");

    let (status, body) = request(&app, Method::GET, "/api/graphs/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_rename_and_delete_graph() {
    let (app, temp_file) = test_app();

    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "Old"}))).await;
    let (status, _) =
        request(&app, Method::PATCH, "/api/graphs/0", Some(json!({"name": "Renamed"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(&app, Method::GET, "/api/graphs/0", None).await;
    assert_eq!(body["name"], "Renamed");

    let (status, body) = request(&app, Method::DELETE, "/api/graphs/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Graph deleted");

    let (_, body) = request(&app, Method::GET, "/api/graphs", None).await;
    assert_eq!(body, json!([]));

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_create_node_and_list() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "NodeGraph"}))).await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/graphs/0/nodes",
        Some(json!({"name": "Node1", "category": "TestCat"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category"], "TestCat");

    let (status, body) = request(&app, Method::GET, "/api/graphs/0/nodes", None).await;
    assert_eq!(status, StatusCode::OK);
    let nodes = body.as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["name"], "Node1");
    assert_eq!(nodes[0]["category"], "TestCat");

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_batch_position_update_floors_coordinates() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "G"}))).await;
    request(&app, Method::POST, "/api/graphs/0/nodes", Some(json!({"name": "N1"}))).await;

    let payload = json!({
        "nodes": [{"name": "N1", "position_x": 100.9, "position_y": 200.2}]
    });
    let (status, body) = request(&app, Method::PATCH, "/api/graphs/0/nodes", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Nodes updated");

    let (_, body) = request(&app, Method::GET, "/api/graphs/0/nodes", None).await;
    let node = &body.as_array().unwrap()[0];
    assert_eq!(node["position_x"], 100);
    assert_eq!(node["position_y"], 200);

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_batch_position_update_unknown_node_fails_whole_batch() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "G"}))).await;
    request(&app, Method::POST, "/api/graphs/0/nodes", Some(json!({"name": "N1"}))).await;

    let payload = json!({
        "nodes": [
            {"name": "N1", "position_x": 1.0, "position_y": 2.0},
            {"name": "Ghost", "position_x": 3.0, "position_y": 4.0}
        ]
    });
    let (status, _) = request(&app, Method::PATCH, "/api/graphs/0/nodes", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = request(&app, Method::GET, "/api/graphs/0/nodes", None).await;
    assert!(body.as_array().unwrap()[0].get("position_x").is_none());

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_node_update_rename_and_grouping() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "G"}))).await;
    request(&app, Method::POST, "/api/graphs/0/nodes", Some(json!({"name": "A"}))).await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/api/graphs/0/nodes/A",
        Some(json!({"new_name": "B", "parent": "Group"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "B");
    assert_eq!(body["parent"], "Group");

    // Empty parent ungroups; the field disappears from the payload
    let (_, body) = request(
        &app,
        Method::PATCH,
        "/api/graphs/0/nodes/B",
        Some(json!({"parent": ""})),
    )
    .await;
    assert!(body.get("parent").is_none());

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_delete_node_cascades_to_edges() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "G"}))).await;
    request(&app, Method::POST, "/api/graphs/0/nodes", Some(json!({"name": "A"}))).await;
    request(&app, Method::POST, "/api/graphs/0/nodes", Some(json!({"name": "B"}))).await;
    request(
        &app,
        Method::POST,
        "/api/graphs/0/edges",
        Some(json!({"start_node": "A", "end_node": "B"})),
    )
    .await;

    let (status, _) = request(&app, Method::DELETE, "/api/graphs/0/nodes/A", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(&app, Method::GET, "/api/graphs/0/edges", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_edge_operations() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "EdgeOpTest"}))).await;
    request(&app, Method::POST, "/api/graphs/0/nodes", Some(json!({"name": "A"}))).await;
    request(&app, Method::POST, "/api/graphs/0/nodes", Some(json!({"name": "B"}))).await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/graphs/0/edges",
        Some(json!({"start_node": "A", "end_node": "B", "description": "Original"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["start"], "A");
    assert_eq!(body["end"], "B");

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/api/graphs/0/edges",
        Some(json!({"start_node": "A", "end_node": "B", "description": "Updated"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Updated");

    let (status, _) = request(
        &app,
        Method::DELETE,
        "/api/graphs/0/edges?start_node=A&end_node=B",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(&app, Method::GET, "/api/graphs/0/edges", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_create_edge_with_unknown_nodes_is_rejected() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "EdgeGraphFail"}))).await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/graphs/0/edges",
        Some(json!({"start_node": "X", "end_node": "Y"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_get_config_returns_document() {
    let (app, temp_file) = test_app();

    let (status, body) = request(&app, Method::GET, "/api/config", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_object());
    assert!(body["node_categories"].is_array());

    cleanup(&temp_file);
}

#[tokio::test]
async fn test_explicit_save_writes_file() {
    let (app, temp_file) = test_app();
    request(&app, Method::POST, "/api/graphs", Some(json!({"name": "Saved"}))).await;

    let (status, body) = request(&app, Method::POST, "/api/utils/save", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("success"));

    let content = fs::read_to_string(&temp_file).unwrap();
    assert!(content.contains("Saved"));

    cleanup(&temp_file);
}
