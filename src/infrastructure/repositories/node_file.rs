//! File Node Repository
//!
//! Implements the NodeRepository port over a JSON or YAML file holding a
//! list of node records, as exported by the persistence service.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Node;
use crate::domain::ports::NodeRepository;
use crate::error::{LegisError, LegisResult};

/// Serialization of a node file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFileFormat {
    Json,
    Yaml,
}

impl NodeFileFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> LegisResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LegisError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse a node list; anything but a top-level list of records is rejected
pub fn parse_nodes(source_name: &str, text: &str, format: NodeFileFormat) -> LegisResult<Vec<Node>> {
    let malformed = |message: String| LegisError::MalformedNodeList {
        source_name: source_name.to_string(),
        message,
    };

    match format {
        NodeFileFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(text)?;
            if !value.is_array() {
                return Err(malformed(format!(
                    "expected a list of nodes, found {}",
                    json_kind(&value)
                )));
            }
            serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
        }
        NodeFileFormat::Yaml => {
            let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(text)?;
            if !value.is_sequence() {
                return Err(malformed("expected a list of nodes".to_string()));
            }
            serde_yaml_ng::from_value(value).map_err(|e| malformed(e.to_string()))
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Node repository backed by one file
#[derive(Debug, Clone)]
pub struct FileNodeRepository {
    path: PathBuf,
}

impl FileNodeRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every node in the file, regardless of document
    pub fn load_all(&self) -> LegisResult<Vec<Node>> {
        let format = NodeFileFormat::from_path(&self.path)?;
        let text = fs::read_to_string(&self.path)?;
        let nodes = parse_nodes(&self.path.display().to_string(), &text, format)?;
        tracing::debug!(path = %self.path.display(), nodes = nodes.len(), "loaded node file");
        Ok(nodes)
    }
}

impl NodeRepository for FileNodeRepository {
    /// An empty document id selects every node in the file
    fn nodes_for_document(&self, document_id: &str) -> anyhow::Result<Vec<Node>> {
        let nodes = self.load_all()?;
        if document_id.is_empty() {
            return Ok(nodes);
        }
        Ok(nodes
            .into_iter()
            .filter(|n| n.document_id == document_id)
            .collect())
    }
}
