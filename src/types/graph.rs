//! Graph board container types

use serde::{Deserialize, Serialize};

use super::{Edge, Node};

/// A named graph board holding nodes and edges
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Graph {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Find a node by name
    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Find a node by name, mutably
    pub fn get_node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    /// Whether a node with the given name exists
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n.name == name)
    }

    /// Find an edge by its ordered endpoint names
    pub fn get_edge(&self, start: &str, end: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(start, end))
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has neither nodes nor edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// The persistence document: an ordered collection of graph boards
///
/// A graph id is its index in the list, matching the on-disk layout
/// `{"graphs": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphSet {
    #[serde(default)]
    pub graphs: Vec<Graph>,
}

impl GraphSet {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a graph by id
    pub fn get(&self, id: usize) -> Option<&Graph> {
        self.graphs.get(id)
    }

    /// Get a graph by id, mutably
    pub fn get_mut(&mut self, id: usize) -> Option<&mut Graph> {
        self.graphs.get_mut(id)
    }

    /// Get the number of graphs
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Check if there are no graphs
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
