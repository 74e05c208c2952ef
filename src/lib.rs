//! IR-Graph Server
//!
//! A graph board server: named graphs of nodes and edges, edited through a
//! REST API and persisted as a JSON document.
//!
//! # Features
//!
//! - **Graph CRUD**: Create, rename, and delete named graph boards
//! - **Node & edge editing**: Categories, descriptions, styles, and node
//!   grouping via parent references, with cascading deletes and renames
//! - **Debounced position autosave**: Drag bursts coalesce into a single
//!   disk write once movement settles, via a dirty-set flusher
//! - **UI configuration**: Category icons and color schemes served
//!   read-only to clients
//!
//! # Modules
//!
//! - `types`: Core data structures (Node, Edge, Graph, GraphSet)
//! - `store`: Thread-safe graph store with CRUD and file persistence
//! - `flusher`: Dirty-set debounced position flusher
//! - `autosave`: Per-graph flusher registry wired to the store
//! - `api`: Axum router and REST handlers
//! - `config`: Environment and UI configuration
//! - `error`: Store error types
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use irgraph::api::{http::create_router, state::AppState};
//! use irgraph::config::UiConfig;
//! use irgraph::store::GraphStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(GraphStore::open("data/graphs.json"));
//!     let state = Arc::new(AppState::new(
//!         store,
//!         UiConfig::default(),
//!         Duration::from_millis(1000),
//!     ));
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod autosave;
pub mod config;
pub mod error;
pub mod flusher;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, UiConfig};
pub use error::{StoreError, StoreResult};
pub use flusher::{DirtyEntry, PendingSet, PositionFlusher, PositionSink};
pub use store::GraphStore;
pub use types::{Edge, Graph, GraphSet, Node};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
