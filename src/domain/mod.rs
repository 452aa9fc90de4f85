//! Domain Layer
//!
//! This is the core of legis - pure tree logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Node, TreeNode, Selection, StudyPlan)
//! - `value_objects/` - Immutable value types (NodeId, NodeKind)
//! - `services/` - Tree building, filtering, selection, extraction, flattening
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless; selections are values
//! 3. **Degrade, don't fail** - Messy node data never panics or errors

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
