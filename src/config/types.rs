// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Server configuration (demo binary)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Output format: `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: default_log_format(),
        }
    }
}

/// Template composition configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TemplatesConfig {
    pub layout: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            layout: crate::template::DEFAULT_LAYOUT.to_string(),
        }
    }
}

/// Static asset configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    /// Directory holding only assets; request paths resolve against it
    pub root: String,
    /// Request path prefix routed to the asset handler, stripped before lookup
    pub prefix: String,
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string()]
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "static".to_string(),
            prefix: "/static/".to_string(),
            index_files: default_index_files(),
        }
    }
}
