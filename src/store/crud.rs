//! CRUD operations for the graph store
//!
//! All functions hold the write lock for the entire operation and persist
//! structural changes before returning. Position updates are the exception:
//! they only touch memory, because their persistence is debounced by the
//! autosave flusher.

use crate::error::{StoreError, StoreResult};
use crate::flusher::DirtyEntry;
use crate::types::{Edge, Graph, Node};

use super::GraphStore;

/// Field changes for a node update; `None` means "no change"
///
/// An empty-string parent clears the group, matching the original wire
/// convention for ungrouping.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub new_name: Option<String>,
    pub category: Option<String>,
    pub parent: Option<String>,
}

/// Create a new empty graph (thread-safe: holds write lock during entire operation)
pub fn create_graph(store: &GraphStore, name: &str) -> StoreResult<usize> {
    let mut set = store.graphs.write();
    set.graphs.push(Graph::new(name));
    let id = set.len() - 1;

    store.persist_set(&set)?;
    Ok(id)
}

/// Delete a graph by id (thread-safe: holds write lock during entire operation)
pub fn delete_graph(store: &GraphStore, id: usize) -> StoreResult<()> {
    let mut set = store.graphs.write();
    if id >= set.len() {
        return Err(StoreError::GraphNotFound(id));
    }
    set.graphs.remove(id);

    store.persist_set(&set)?;
    Ok(())
}

/// Rename a graph (thread-safe: holds write lock during entire operation)
pub fn rename_graph(store: &GraphStore, id: usize, new_name: &str) -> StoreResult<()> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;
    graph.name = new_name.to_string();

    store.persist_set(&set)?;
    Ok(())
}

/// Add a node to a graph; a node with an existing name is ignored and the
/// stored node is returned unchanged (original behavior)
pub fn add_node(store: &GraphStore, id: usize, node: Node) -> StoreResult<Node> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;

    if let Some(existing) = graph.get_node(&node.name) {
        return Ok(existing.clone());
    }

    graph.nodes.push(node.clone());
    store.persist_set(&set)?;
    Ok(node)
}

/// Update a node's name, category, or parent group
///
/// A rename is rejected when the new name is already taken; edges and child
/// parent references follow the rename.
pub fn update_node(
    store: &GraphStore,
    id: usize,
    name: &str,
    patch: NodePatch,
) -> StoreResult<Node> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;

    if !graph.has_node(name) {
        return Err(StoreError::NodeNotFound(name.to_string()));
    }

    if let Some(ref new_name) = patch.new_name {
        if new_name != name {
            if graph.has_node(new_name) {
                return Err(StoreError::DuplicateNode(new_name.clone()));
            }
            rename_in_place(graph, name, new_name);
        }
    }

    let current_name = patch.new_name.as_deref().unwrap_or(name).to_string();
    let node = graph
        .get_node_mut(&current_name)
        .expect("renamed node present");

    if let Some(category) = patch.category {
        node.category = category;
    }
    if let Some(parent) = patch.parent {
        // Empty string ungroups the node
        node.parent = if parent.is_empty() { None } else { Some(parent) };
    }

    let updated = node.clone();
    store.persist_set(&set)?;
    Ok(updated)
}

/// Rewrite every reference to `old` as `new`: the node itself, edge
/// endpoints, and children grouped under it
fn rename_in_place(graph: &mut Graph, old: &str, new: &str) {
    if let Some(node) = graph.get_node_mut(old) {
        node.name = new.to_string();
    }
    for edge in &mut graph.edges {
        if edge.start == old {
            edge.start = new.to_string();
        }
        if edge.end == old {
            edge.end = new.to_string();
        }
    }
    for node in &mut graph.nodes {
        if node.parent.as_deref() == Some(old) {
            node.parent = Some(new.to_string());
        }
    }
}

/// Delete a node by name, cascading to incident edges and clearing parent
/// references in remaining nodes
pub fn delete_node(store: &GraphStore, id: usize, name: &str) -> StoreResult<()> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;

    if !graph.has_node(name) {
        return Err(StoreError::NodeNotFound(name.to_string()));
    }

    graph.edges.retain(|e| !e.touches(name));
    graph.nodes.retain(|n| n.name != name);
    for node in &mut graph.nodes {
        if node.parent.as_deref() == Some(name) {
            node.parent = None;
        }
    }

    store.persist_set(&set)?;
    Ok(())
}

/// Add an edge; both endpoints must name existing nodes
pub fn add_edge(store: &GraphStore, id: usize, edge: Edge) -> StoreResult<Edge> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;

    if !graph.has_node(&edge.start) {
        return Err(StoreError::UnknownEndpoint(edge.start.clone()));
    }
    if !graph.has_node(&edge.end) {
        return Err(StoreError::UnknownEndpoint(edge.end.clone()));
    }

    graph.edges.push(edge.clone());
    store.persist_set(&set)?;
    Ok(edge)
}

/// Update an edge's description and, when given, its style
pub fn update_edge(
    store: &GraphStore,
    id: usize,
    start: &str,
    end: &str,
    description: Option<String>,
    style: Option<String>,
) -> StoreResult<Edge> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;

    let edge = graph
        .edges
        .iter_mut()
        .find(|e| e.connects(start, end))
        .ok_or_else(|| StoreError::EdgeNotFound {
            start: start.to_string(),
            end: end.to_string(),
        })?;

    edge.description = description;
    if let Some(style) = style {
        edge.style = style;
    }

    let updated = edge.clone();
    store.persist_set(&set)?;
    Ok(updated)
}

/// Delete an edge by its ordered endpoint names
pub fn delete_edge(store: &GraphStore, id: usize, start: &str, end: &str) -> StoreResult<()> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;

    let before = graph.edges.len();
    graph.edges.retain(|e| !e.connects(start, end));
    if graph.edges.len() == before {
        return Err(StoreError::EdgeNotFound {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    store.persist_set(&set)?;
    Ok(())
}

/// Batch-upsert node positions
///
/// The batch is atomic: every name is validated before any position is
/// written, so an unknown node fails the whole request. Memory only; the
/// autosave flusher owns flushing positions to disk.
pub fn update_positions(store: &GraphStore, id: usize, entries: &[DirtyEntry]) -> StoreResult<()> {
    let mut set = store.graphs.write();
    let graph = set.get_mut(id).ok_or(StoreError::GraphNotFound(id))?;

    for entry in entries {
        if !graph.has_node(&entry.key) {
            return Err(StoreError::NodeNotFound(entry.key.clone()));
        }
    }

    for entry in entries {
        let node = graph.get_node_mut(&entry.key).expect("validated above");
        node.position_x = Some(entry.x);
        node.position_y = Some(entry.y);
    }

    Ok(())
}
