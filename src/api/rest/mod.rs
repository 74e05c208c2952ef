//! REST API module for HTTP endpoints
//!
//! Provides the graph-editing endpoints:
//! - `/api/graphs` - graph collection (list, create)
//! - `/api/graphs/:id` - one graph (fetch, rename, delete)
//! - `/api/graphs/:id/nodes` - nodes (list, create, batch position update)
//! - `/api/graphs/:id/nodes/:name` - one node (update, delete)
//! - `/api/graphs/:id/edges` - edges (list, create, update, delete)
//! - `/api/config` - UI configuration
//! - `/api/utils/save` - explicit persistence

pub mod edges;
pub mod graphs;
pub mod misc;
pub mod nodes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::StoreError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map a store error onto an HTTP response
pub fn store_error_response(e: StoreError) -> Response {
    match e {
        StoreError::GraphNotFound(_)
        | StoreError::NodeNotFound(_)
        | StoreError::EdgeNotFound { .. } => {
            (StatusCode::NOT_FOUND, Json(ApiError::not_found(e.to_string()))).into_response()
        }
        StoreError::DuplicateNode(_) | StoreError::UnknownEndpoint(_) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request(e.to_string())),
        )
            .into_response(),
        StoreError::Io(_) | StoreError::Serde(_) => {
            log::error!("Store operation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(e.to_string())),
            )
                .into_response()
        }
    }
}

/// URL-decode a path segment (handles spaces and special chars in node
/// names)
pub fn decode_name(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
