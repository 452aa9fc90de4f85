//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod node_repository;
pub mod text_generator;

pub use node_repository::NodeRepository;
pub use text_generator::{GenerationKind, GenerationRequest, TextGenerator};
