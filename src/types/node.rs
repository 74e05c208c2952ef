//! Node type for graph boards

use serde::{Deserialize, Serialize};

use super::default_category;

/// A node on a graph board
///
/// Positions are optional: a node created through the API has no position
/// until the client places it. `parent` names another node acting as a
/// visual group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_y: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Node {
    /// Create a new node with the default category and no position
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: default_category(),
            position_x: None,
            position_y: None,
            parent: None,
        }
    }

    /// Create a new node with an explicit category
    pub fn with_category(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            position_x: None,
            position_y: None,
            parent: None,
        }
    }

    /// Whether the node has both coordinates set
    pub fn has_position(&self) -> bool {
        self.position_x.is_some() && self.position_y.is_some()
    }
}
