//! Graph store - core data engine
//!
//! This module contains the thread-safe store of graph boards with CRUD
//! operations and JSON file persistence.

mod crud;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::flusher::DirtyEntry;
use crate::types::{Edge, Graph, GraphSet, Node};

pub use crud::NodePatch;

/// Thread-safe store of graph boards backed by a JSON file
pub struct GraphStore {
    pub(crate) data_file_path: String,
    pub(crate) graphs: RwLock<GraphSet>,
}

impl GraphStore {
    /// Open a store with an explicit file path
    ///
    /// A missing file yields an empty store; a malformed file is logged and
    /// treated as empty rather than refusing to start.
    pub fn open(file_path: impl Into<String>) -> Self {
        let data_file_path = file_path.into();
        let graphs = match Self::load_from_file(&data_file_path) {
            Ok(set) => set,
            Err(e) => {
                log::warn!(
                    "Could not load graphs from {}: {}. Starting empty.",
                    data_file_path,
                    e
                );
                GraphSet::default()
            }
        };

        Self {
            data_file_path,
            graphs: RwLock::new(graphs),
        }
    }

    /// Load the graph document from a file (static helper for initialization)
    fn load_from_file(file_path: &str) -> StoreResult<GraphSet> {
        if !Path::new(file_path).exists() {
            return Ok(GraphSet::default());
        }

        let content = fs::read_to_string(file_path)?;
        let set: GraphSet = serde_json::from_str(&content)?;
        Ok(set)
    }

    /// Persist all graphs to the data file
    ///
    /// Takes the write lock so concurrent persists cannot race on the temp
    /// file.
    pub fn persist(&self) -> StoreResult<()> {
        let graphs = self.graphs.write();
        self.persist_set(&graphs)
    }

    /// Persist a graph document (internal helper, caller may hold the lock)
    ///
    /// Written via a temp file and rename so a crash mid-write leaves either
    /// the old document or the new one, never a truncated file.
    pub(crate) fn persist_set(&self, set: &GraphSet) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(set)?;

        let path = Path::new(&self.data_file_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        log::debug!("Persisted {} graphs to {}", set.len(), self.data_file_path);
        Ok(())
    }

    /// Get a clone of the full graph document (thread-safe read)
    pub fn snapshot(&self) -> GraphSet {
        self.graphs.read().clone()
    }

    /// Get a clone of a single graph
    pub fn get_graph(&self, id: usize) -> StoreResult<Graph> {
        self.graphs
            .read()
            .get(id)
            .cloned()
            .ok_or(StoreError::GraphNotFound(id))
    }

    /// List all graphs
    pub fn list_graphs(&self) -> Vec<Graph> {
        self.graphs.read().graphs.clone()
    }

    /// Get the number of graphs
    pub fn graph_count(&self) -> usize {
        self.graphs.read().len()
    }

    /// Get the data file path
    pub fn file_path(&self) -> &str {
        &self.data_file_path
    }
}

// Re-export CRUD operations from crud.rs as inherent methods
impl GraphStore {
    /// Create a new empty graph, returning its id
    pub fn create_graph(&self, name: &str) -> StoreResult<usize> {
        crud::create_graph(self, name)
    }

    /// Delete a graph by id; later ids shift down by one
    pub fn delete_graph(&self, id: usize) -> StoreResult<()> {
        crud::delete_graph(self, id)
    }

    /// Rename a graph
    pub fn rename_graph(&self, id: usize, new_name: &str) -> StoreResult<()> {
        crud::rename_graph(self, id, new_name)
    }

    /// Add a node to a graph; a duplicate name is ignored
    pub fn add_node(&self, id: usize, node: Node) -> StoreResult<Node> {
        crud::add_node(self, id, node)
    }

    /// Update a node's name, category, or parent group
    pub fn update_node(&self, id: usize, name: &str, patch: NodePatch) -> StoreResult<Node> {
        crud::update_node(self, id, name, patch)
    }

    /// Delete a node, its incident edges, and parent references to it
    pub fn delete_node(&self, id: usize, name: &str) -> StoreResult<()> {
        crud::delete_node(self, id, name)
    }

    /// Add an edge; both endpoints must exist
    pub fn add_edge(&self, id: usize, edge: Edge) -> StoreResult<Edge> {
        crud::add_edge(self, id, edge)
    }

    /// Update an edge's description and, optionally, its style
    pub fn update_edge(
        &self,
        id: usize,
        start: &str,
        end: &str,
        description: Option<String>,
        style: Option<String>,
    ) -> StoreResult<Edge> {
        crud::update_edge(self, id, start, end, description, style)
    }

    /// Delete an edge by its endpoint names
    pub fn delete_edge(&self, id: usize, start: &str, end: &str) -> StoreResult<()> {
        crud::delete_edge(self, id, start, end)
    }

    /// Batch-upsert node positions; the whole batch fails if any name is
    /// unknown (memory only, persistence is owned by the autosave flusher)
    pub fn update_positions(&self, id: usize, entries: &[DirtyEntry]) -> StoreResult<()> {
        crud::update_positions(self, id, entries)
    }
}
