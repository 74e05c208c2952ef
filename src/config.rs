//! Application and UI configuration

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::flusher::DEFAULT_FLUSH_DELAY_MS;

/// A node category with an optional icon, as shown in the client's
/// category picker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// UI configuration served read-only to clients
///
/// Fetched by the client once at startup; the server never interprets the
/// color schemes, it only passes them through.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub node_categories: Vec<NodeCategory>,
    #[serde(default)]
    pub color_schemes: Map<String, Value>,
}

impl UiConfig {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or malformed (original behavior: warn, don't fail startup)
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Could not parse UI config {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read UI config {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }
}

/// Server configuration from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub graphs_file: String,
    pub ui_config_file: String,
    pub flush_delay: Duration,
}

impl AppConfig {
    /// Read configuration from the environment, with defaults for local use
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string()),
            graphs_file: path_from_env("GRAPHS_FILE_PATH", "data/graphs.json"),
            ui_config_file: path_from_env("UI_CONFIG_PATH", "data/config.json"),
            flush_delay: Duration::from_millis(
                env::var("FLUSH_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_FLUSH_DELAY_MS),
            ),
        }
    }
}

/// Resolve a file path from an environment variable, anchoring relative
/// paths at the current directory
fn path_from_env(var: &str, default: &str) -> String {
    let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));

    match env::var(var) {
        Ok(path) => {
            if Path::new(&path).is_absolute() {
                path
            } else {
                current_dir.join(path).to_string_lossy().to_string()
            }
        }
        Err(_) => current_dir.join(default).to_string_lossy().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_config_missing_file_defaults() {
        let config = UiConfig::load("does/not/exist.json");
        assert!(config.node_categories.is_empty());
        assert!(config.color_schemes.is_empty());
    }

    #[test]
    fn test_ui_config_parses_categories() {
        let json = r##"{
            "node_categories": [
                {"name": "Service", "icon": "data:image/svg+xml;base64,abc"},
                {"name": "Database"}
            ],
            "color_schemes": {"default": {"background": "#ffffff"}}
        }"##;

        let config: UiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.node_categories.len(), 2);
        assert_eq!(config.node_categories[0].name, "Service");
        assert!(config.node_categories[0].icon.is_some());
        assert!(config.node_categories[1].icon.is_none());
        assert!(config.color_schemes.contains_key("default"));
    }
}
