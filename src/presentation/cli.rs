//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Every subcommand reads one node file (.json, .yaml or .yml)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Legis - hierarchical selection and content aggregation for legal texts
#[derive(Parser, Debug)]
#[command(name = "legis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of .legis/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the document structure as a tree
    Tree {
        /// Node file (.json, .yaml or .yml)
        file: PathBuf,

        /// Only nodes of this document
        #[arg(short, long)]
        document: Option<String>,

        /// Keep only these nodes, their ancestors and their descendants
        #[arg(long = "focus", value_name = "ID")]
        focus: Vec<String>,
    },

    /// Check and uncheck nodes, then print the resulting tri-state tree
    Select {
        /// Node file (.json, .yaml or .yml)
        file: PathBuf,

        /// Only nodes of this document
        #[arg(short, long)]
        document: Option<String>,

        /// Nodes to check, applied in order
        #[arg(long = "check", value_name = "ID")]
        check: Vec<String>,

        /// Nodes to uncheck, applied in order after every check
        #[arg(long = "uncheck", value_name = "ID")]
        uncheck: Vec<String>,
    },

    /// Print the given nodes and all their descendants as JSON
    Extract {
        /// Node file (.json, .yaml or .yml)
        file: PathBuf,

        /// Subtree roots, in discovery order
        #[arg(long = "root", value_name = "ID", required = true)]
        roots: Vec<String>,
    },

    /// Remove a node and its descendants, printing what is kept and removed
    Remove {
        /// Node file (.json, .yaml or .yml)
        file: PathBuf,

        /// Subtree root to remove
        #[arg(long = "root", value_name = "ID")]
        root: String,
    },

    /// Print the text of a node and everything beneath it
    Flatten {
        /// Node file (.json, .yaml or .yml)
        file: PathBuf,

        /// Node to flatten
        #[arg(long = "node", value_name = "ID")]
        node: String,

        /// Print the uncapped text used for generation
        #[arg(long)]
        full: bool,

        /// Display cap in characters
        #[arg(long, value_name = "N", conflicts_with = "full")]
        max_chars: Option<usize>,
    },
}
