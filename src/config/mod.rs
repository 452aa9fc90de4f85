//! Configuration module for legis
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LEGIS_*)
//! 3. Project config (.legis/config.toml)
//! 4. User config (~/.config/legis/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, ConfigWarning};
pub use types::{Config, FlattenConfig, OutputConfig, SelectionConfig, TreeConfig, UnicodeMode};
