//! Error types for store operations

use std::fmt;
use std::io;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while operating on the graph store
#[derive(Debug)]
pub enum StoreError {
    /// No graph with the given id
    GraphNotFound(usize),
    /// No node with the given name in the graph
    NodeNotFound(String),
    /// A node with the given name already exists
    DuplicateNode(String),
    /// An edge endpoint does not name a node in the graph
    UnknownEndpoint(String),
    /// No edge between the given node names
    EdgeNotFound { start: String, end: String },
    Io(io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::GraphNotFound(id) => write!(f, "Graph {} not found", id),
            StoreError::NodeNotFound(name) => write!(f, "Node '{}' not found", name),
            StoreError::DuplicateNode(name) => {
                write!(f, "Node '{}' already exists", name)
            }
            StoreError::UnknownEndpoint(name) => {
                write!(f, "Edge endpoint '{}' is not in graph", name)
            }
            StoreError::EdgeNotFound { start, end } => {
                write!(f, "Edge '{}' -> '{}' not found", start, end)
            }
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Serde(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serde(e)
    }
}
