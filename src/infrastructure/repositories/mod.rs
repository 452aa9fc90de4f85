//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod node_file;

pub use node_file::{parse_nodes, FileNodeRepository, NodeFileFormat};
