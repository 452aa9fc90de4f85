//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SelectionSession` - One open document and its checked nodes
//! - `StudyPlanService` - Attach/detach slices of a law to a contest
//! - `GenerationUseCase` - Hand full subtree text to a text generator

pub mod generation;
pub mod session;
pub mod study_plan;

pub use generation::{build_request, GenerationUseCase};
pub use session::SelectionSession;
pub use study_plan::StudyPlanService;
