//! Shared state for command handlers

use std::path::Path;

use anyhow::{Context, Result};

use legis::config::Config;
use legis::domain::entities::Node;
use legis::domain::ports::NodeRepository;
use legis::infrastructure::FileNodeRepository;
use legis::ui::detect_capabilities;

/// Resolved configuration and output flags
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub json: bool,
    pub unicode: bool,
}

impl CommandContext {
    /// Resolve configuration from an explicit file or the usual locations
    pub fn new(json: bool, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                config.with_env_overrides()
            }
            None => {
                let cwd = std::env::current_dir().ok();
                Config::load_or_default(cwd.as_deref())
            }
        };

        let caps = detect_capabilities();
        let unicode = config.output.unicode.resolve(caps.supports_unicode);

        Ok(Self {
            config,
            json,
            unicode,
        })
    }

    /// Read every node of `document` (all nodes when `None`) from `file`
    pub fn load_nodes(&self, file: &Path, document: Option<&str>) -> Result<Vec<Node>> {
        let repository = FileNodeRepository::new(file);
        let nodes = repository
            .nodes_for_document(document.unwrap_or(""))
            .with_context(|| format!("failed to read nodes from {}", file.display()))?;
        tracing::info!(file = %file.display(), nodes = nodes.len(), "loaded nodes");
        Ok(nodes)
    }
}
