//! Edge type for graph boards

use serde::{Deserialize, Serialize};

use super::{default_style, default_true};

/// An edge between two nodes, referenced by node name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub start: String,
    pub end: String,
    #[serde(default = "default_true")]
    pub directed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_style")]
    pub style: String,
}

impl Edge {
    /// Create a directed edge with no description and the solid style
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            directed: true,
            description: None,
            style: default_style(),
        }
    }

    /// Create an edge with a description
    pub fn with_description(
        start: impl Into<String>,
        end: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::new(start, end)
        }
    }

    /// Whether this edge connects the given node names, in order
    pub fn connects(&self, start: &str, end: &str) -> bool {
        self.start == start && self.end == end
    }

    /// Whether this edge touches the given node name at either endpoint
    pub fn touches(&self, name: &str) -> bool {
        self.start == name || self.end == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_serialization() {
        let edge = Edge::with_description("A", "B", "calls");

        let json = serde_json::to_string(&edge).unwrap();
        assert!(json.contains("\"start\":\"A\""));
        assert!(json.contains("\"end\":\"B\""));
        assert!(json.contains("calls"));
    }

    #[test]
    fn test_edge_defaults_on_deserialize() {
        let json = r#"{"start":"A","end":"B"}"#;
        let edge: Edge = serde_json::from_str(json).unwrap();

        assert!(edge.directed);
        assert_eq!(edge.style, "solid");
        assert!(edge.description.is_none());
    }

    #[test]
    fn test_edge_without_description_skips_field() {
        let edge = Edge::new("A", "B");
        let json = serde_json::to_string(&edge).unwrap();
        assert!(!json.contains("description"));
    }
}
