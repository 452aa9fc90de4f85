//! Error types for legis
//!
//! The engine itself degrades on messy data instead of failing; the
//! variants here cover contract violations and the I/O around the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for legis operations
pub type LegisResult<T> = Result<T, LegisError>;

/// Main error type for legis operations
#[derive(Error, Debug)]
pub enum LegisError {
    /// Input is not a list of node records at all
    #[error("malformed node list in {source_name}: {message}")]
    MalformedNodeList {
        source_name: String,
        message: String,
    },

    /// Node file extension we cannot read
    #[error("unsupported node file format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    /// Requested node is absent from the loaded list
    #[error("node '{id}' not found")]
    NodeNotFound { id: String },

    /// Kind name outside the closed kind set
    #[error("unknown node kind '{kind}'")]
    UnknownNodeKind { kind: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
