//! Data types for the graph board server

mod edge;
mod graph;
mod node;

pub use edge::Edge;
pub use graph::{Graph, GraphSet};
pub use node::Node;

/// Default node category for serde deserialization
pub fn default_category() -> String {
    "Default".to_string()
}

/// Default edge style for serde deserialization
pub fn default_style() -> String {
    "solid".to_string()
}

/// Default for boolean fields that are true unless stated
pub fn default_true() -> bool {
    true
}
