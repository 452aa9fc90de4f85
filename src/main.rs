//! Legis CLI - hierarchical selection and content aggregation
//!
//! Usage: legis <COMMAND>
//!
//! Commands:
//!   tree     Print the document structure as a tree
//!   select   Check and uncheck nodes, print the tri-state tree
//!   extract  Print nodes and their descendants as JSON
//!   remove   Remove a subtree, print kept and removed ids
//!   flatten  Print the text of a node and its descendants

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use legis::presentation::{Cli, Commands};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CommandContext::new(cli.json, cli.config.as_deref())?;

    match cli.command {
        Commands::Tree {
            file,
            document,
            focus,
        } => commands::cmd_tree(&ctx, &file, document.as_deref(), &focus),
        Commands::Select {
            file,
            document,
            check,
            uncheck,
        } => commands::cmd_select(&ctx, &file, document.as_deref(), &check, &uncheck),
        Commands::Extract { file, roots } => commands::cmd_extract(&ctx, &file, &roots),
        Commands::Remove { file, root } => commands::cmd_remove(&ctx, &file, &root),
        Commands::Flatten {
            file,
            node,
            full,
            max_chars,
        } => commands::cmd_flatten(&ctx, &file, &node, full, max_chars),
    }
}

/// Logs go to stderr; RUST_LOG wins over -v.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
