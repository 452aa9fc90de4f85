//! Configuration types

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{
    Flattener, SelectionManager, SubtreeService, TreeBuilder, DEFAULT_DISPLAY_MAX_CHARS,
    DEFAULT_ELLIPSIS, DEFAULT_MAX_DEPTH,
};
use crate::domain::value_objects::SelectableKinds;
use crate::error::LegisResult;

use super::loader::{self, ConfigWarning};

/// Display-mode flattening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenConfig {
    #[serde(default = "default_display_max_chars")]
    pub display_max_chars: usize,

    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            display_max_chars: default_display_max_chars(),
            ellipsis: default_ellipsis(),
        }
    }
}

fn default_display_max_chars() -> usize {
    DEFAULT_DISPLAY_MAX_CHARS
}

fn default_ellipsis() -> String {
    DEFAULT_ELLIPSIS.to_string()
}

/// Which kinds carry a checkbox
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub selectable_kinds: SelectableKinds,
}

/// Forest construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub unicode: UnicodeMode,
}

/// Whether tree output uses unicode checkbox glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl UnicodeMode {
    /// Resolve against what the terminal supports
    pub fn resolve(self, terminal_supports_unicode: bool) -> bool {
        match self {
            UnicodeMode::Auto => terminal_supports_unicode,
            UnicodeMode::Always => true,
            UnicodeMode::Never => false,
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub flatten: FlattenConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LegisResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LegisResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (LEGIS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn tree_builder(&self) -> TreeBuilder {
        TreeBuilder::new(self.tree.max_depth)
    }

    pub fn selection_manager(&self) -> SelectionManager {
        SelectionManager::new(self.selection.selectable_kinds.clone())
    }

    pub fn subtree_service(&self) -> SubtreeService {
        SubtreeService::new(self.tree.max_depth)
    }

    pub fn flattener(&self) -> Flattener {
        Flattener::new()
            .with_display_max_chars(self.flatten.display_max_chars)
            .with_ellipsis(self.flatten.ellipsis.clone())
            .with_max_depth(self.tree.max_depth)
    }
}
