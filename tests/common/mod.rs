//! Common test utilities for legis scenario and CLI tests.
//!
//! This module provides:
//! - Fixtures: a small constitution-like document as node records
//! - `write_nodes`: persists fixtures to a temp file in JSON or YAML
//! - `legis`: the binary under test with a neutral environment

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use legis::{Node, NodeKind};

pub const DOCUMENT: &str = "cf88";

/// Title I > (Chapter I > Art. 1 > §1, Chapter II > Subsection > Art. 2), Title II
pub fn constitution() -> Vec<Node> {
    vec![
        // deliberately unordered
        Node::new("a2", NodeKind::Article, "Art. 2")
            .with_parent("ss1")
            .with_number("2")
            .with_content("Everyone is equal before the law."),
        Node::new("t1", NodeKind::Title, "Title I - Fundamental Principles").with_order(1),
        Node::new("c2", NodeKind::Chapter, "Chapter II - Rights")
            .with_parent("t1")
            .with_order(2),
        Node::new("c1", NodeKind::Chapter, "Chapter I - The State")
            .with_parent("t1")
            .with_order(1),
        Node::new("a1", NodeKind::Article, "Art. 1")
            .with_parent("c1")
            .with_number("1")
            .with_content("The Republic is formed by the union of the states."),
        Node::new("p1", NodeKind::Paragraph, "§1")
            .with_parent("a1")
            .with_content("All power emanates from the people."),
        Node::new("ss1", NodeKind::Subsection, "General Provisions")
            .with_parent("c2")
            .with_content("General Provisions"),
        Node::new("t2", NodeKind::Title, "Title II - Organization").with_order(2),
    ]
    .into_iter()
    .map(|node| node.with_document(DOCUMENT))
    .collect()
}

/// Write `nodes` to `dir/name`, as YAML when the name says so
pub fn write_nodes(dir: &Path, name: &str, nodes: &[Node]) -> PathBuf {
    let path = dir.join(name);
    let text = if name.ends_with(".yaml") || name.ends_with(".yml") {
        serde_yaml_ng::to_string(nodes).unwrap()
    } else {
        serde_json::to_string_pretty(nodes).unwrap()
    };
    std::fs::write(&path, text).unwrap();
    path
}

/// The legis binary, isolated from the developer's config and terminal
pub fn legis(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_legis"));
    cmd.current_dir(home);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd.env("NO_COLOR", "1");
    cmd.env("TERM", "dumb");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("LEGIS_DISPLAY_MAX_CHARS");
    cmd.env_remove("LEGIS_SELECTABLE_KINDS");
    cmd.env_remove("LEGIS_MAX_DEPTH");
    cmd
}
