//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{NodeKind, SelectableKinds};
use crate::error::{LegisError, LegisResult};

use super::types::Config;

/// Project-level config location, relative to the project root
pub(crate) const PROJECT_CONFIG: &str = ".legis/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LegisResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LegisError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    for path in candidate_paths(project_root) {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                tracing::debug!(path = %path.display(), "loaded configuration");
                return with_env_overrides(config);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
            }
        }
    }

    with_env_overrides(Config::default())
}

fn candidate_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("legis/config.toml"));
    }
    paths
}

/// Apply environment variable overrides (LEGIS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply LEGIS_* overrides read through `get_env`.
///
/// Values that do not parse are logged and skipped.
pub fn apply_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // LEGIS_DISPLAY_MAX_CHARS
    if let Some(raw) = get_env("LEGIS_DISPLAY_MAX_CHARS") {
        match raw.trim().parse::<usize>() {
            Ok(max) => config.flatten.display_max_chars = max,
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid LEGIS_DISPLAY_MAX_CHARS"),
        }
    }

    // LEGIS_SELECTABLE_KINDS (comma-separated)
    if let Some(raw) = get_env("LEGIS_SELECTABLE_KINDS") {
        let parsed: Result<Vec<NodeKind>, _> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect();
        match parsed {
            Ok(kinds) if !kinds.is_empty() => {
                config.selection.selectable_kinds = SelectableKinds::new(kinds);
            }
            Ok(_) => tracing::warn!("ignoring empty LEGIS_SELECTABLE_KINDS"),
            Err(err) => tracing::warn!(error = %err, "ignoring invalid LEGIS_SELECTABLE_KINDS"),
        }
    }

    // LEGIS_MAX_DEPTH
    if let Some(raw) = get_env("LEGIS_MAX_DEPTH") {
        match raw.trim().parse::<usize>() {
            Ok(depth) => config.tree.max_depth = depth,
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid LEGIS_MAX_DEPTH"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "flatten",
        "display_max_chars",
        "ellipsis",
        "selection",
        "selectable_kinds",
        "tree",
        "max_depth",
        "output",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
