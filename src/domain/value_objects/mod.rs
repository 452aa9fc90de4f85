//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod node_id;
mod node_kind;
mod order_key;

pub use node_id::NodeId;
pub use node_kind::{NodeKind, SelectableKinds};
pub use order_key::OrderKey;
