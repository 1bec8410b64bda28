use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::universe::{LoadOptions, DEFAULT_INCLUDE_PATTERNS};
use crate::walker::{
    Markers, WalkOptions, DEFAULT_INPUT_NAMESPACE, DEFAULT_NAMESPACE_PREFIX,
    DEFAULT_NODE_CATEGORY_MARKER, DEFAULT_NODE_NAME_MARKER,
};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# flux-catalog configuration file
# Location: ~/.flux-catalog/config.toml

[markers]
# Attribute that marks a type as a node
node_name = "ProtoFlux.Core.NodeNameAttribute"

# Attribute whose first argument is the node's category path
node_category = "ProtoFlux.Core.NodeCategoryAttribute"

[scan]
# Only types in namespaces starting with this prefix are classified
namespace_prefix = "ProtoFlux."

# Namespace of ValueArgument / ObjectArgument / ObjectArgumentList
input_namespace = "ProtoFlux.Core"

# File name patterns read when the source is a directory
# Default: ["*.json"]
# Example: include = ["*.json", "*.dump"]  # use [] to try every file
include = ["*.json"]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

/// Marker attribute names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkersConfig {
    #[serde(default = "default_node_name")]
    pub node_name: String,

    #[serde(default = "default_node_category")]
    pub node_category: String,
}

/// Which types and files are considered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,

    #[serde(default = "default_input_namespace")]
    pub input_namespace: String,

    /// File name patterns; empty means every file
    #[serde(default = "default_include")]
    pub include: Vec<String>,
}

fn default_node_name() -> String {
    DEFAULT_NODE_NAME_MARKER.to_string()
}

fn default_node_category() -> String {
    DEFAULT_NODE_CATEGORY_MARKER.to_string()
}

fn default_namespace_prefix() -> String {
    DEFAULT_NAMESPACE_PREFIX.to_string()
}

fn default_input_namespace() -> String {
    DEFAULT_INPUT_NAMESPACE.to_string()
}

fn default_include() -> Vec<String> {
    DEFAULT_INCLUDE_PATTERNS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            node_category: default_node_category(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: default_namespace_prefix(),
            input_namespace: default_input_namespace(),
            include: default_include(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| CatalogError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "markers.node_name" => Some(self.markers.node_name.clone()),
            "markers.node_category" => Some(self.markers.node_category.clone()),
            "scan.namespace_prefix" => Some(self.scan.namespace_prefix.clone()),
            "scan.input_namespace" => Some(self.scan.input_namespace.clone()),
            "scan.include" => Some(format!("{:?}", self.scan.include)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "markers.node_name" => self.markers.node_name = value.trim().to_string(),
            "markers.node_category" => self.markers.node_category = value.trim().to_string(),
            "scan.namespace_prefix" => self.scan.namespace_prefix = value.trim().to_string(),
            "scan.input_namespace" => self.scan.input_namespace = value.trim().to_string(),
            "scan.include" => self.scan.include = parse_string_list(value),
            _ => {
                return Err(CatalogError::ConfigKeyNotFound {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "markers.node_name",
            "markers.node_category",
            "scan.namespace_prefix",
            "scan.input_namespace",
            "scan.include",
        ]
        .iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }

    /// Convert to WalkOptions for the walker
    pub fn to_walk_options(&self) -> WalkOptions {
        WalkOptions {
            markers: Markers {
                node_name: self.markers.node_name.clone(),
                node_category: self.markers.node_category.clone(),
            },
            namespace_prefix: self.scan.namespace_prefix.clone(),
            input_namespace: self.scan.input_namespace.clone(),
        }
    }

    /// Convert to LoadOptions for the dump loader
    pub fn to_load_options(&self) -> LoadOptions {
        LoadOptions {
            include: self.scan.include.clone(),
        }
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();

    // JSON array format first: ["a", "b"]
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
