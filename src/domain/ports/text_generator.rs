//! TextGenerator port - hand-off to an external text-generation service
//!
//! The engine prepares the request; what comes back is opaque text that the
//! engine never parses.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// What the generator is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    /// Plain-language explanation of the text
    #[default]
    Explanation,
    /// Drill questions
    Questions,
    /// Practice exercises
    Exercises,
}

/// Title plus complete legal text of one node's subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    pub title: String,
    pub text: String,
}

/// Abstract text-generation collaborator
pub trait TextGenerator {
    /// Produce free-form text for the request
    fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
