//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{edges, graphs, misc, nodes};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Graph collection
        .route(
            "/api/graphs",
            get(graphs::list_graphs).post(graphs::create_graph),
        )
        .route(
            "/api/graphs/:id",
            get(graphs::get_graph)
                .patch(graphs::rename_graph)
                .delete(graphs::delete_graph),
        )
        // Nodes
        .route(
            "/api/graphs/:id/nodes",
            get(nodes::list_nodes)
                .post(nodes::create_node)
                .patch(nodes::update_positions),
        )
        .route(
            "/api/graphs/:id/nodes/:name",
            patch(nodes::update_node).delete(nodes::delete_node),
        )
        // Edges
        .route(
            "/api/graphs/:id/edges",
            get(edges::list_edges)
                .post(edges::create_edge)
                .patch(edges::update_edge)
                .delete(edges::delete_edge),
        )
        // UI config and explicit save
        .route("/api/config", get(misc::get_ui_config))
        .route("/api/utils/save", post(misc::save_graphs))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::store::GraphStore;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let store = Arc::new(GraphStore::open("test_health_graphs.json"));
        let state = Arc::new(AppState::new(
            store,
            UiConfig::default(),
            Duration::from_millis(50),
        ));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
