//! Text-generation hand-off
//!
//! The generator always receives the complete legal text of the subtree,
//! regardless of display caps.

use anyhow::Result;

use crate::domain::entities::Node;
use crate::domain::ports::{GenerationKind, GenerationRequest, TextGenerator};
use crate::domain::services::{FlattenMode, Flattener};

/// Build the request for `node` from the full node list
pub fn build_request(
    flattener: &Flattener,
    kind: GenerationKind,
    node: &Node,
    all_nodes: &[Node],
) -> GenerationRequest {
    let text = flattener.flatten(node, all_nodes, FlattenMode::Full).content;
    GenerationRequest {
        kind,
        title: node.title.clone(),
        text,
    }
}

/// Sends flattened subtrees to a text generator
pub struct GenerationUseCase<G>
where
    G: TextGenerator,
{
    generator: G,
    flattener: Flattener,
}

impl<G> GenerationUseCase<G>
where
    G: TextGenerator,
{
    pub fn new(generator: G, flattener: Flattener) -> Self {
        Self {
            generator,
            flattener,
        }
    }

    /// Generate text of `kind` for `node`; the response is returned verbatim
    pub fn execute(&self, kind: GenerationKind, node: &Node, all_nodes: &[Node]) -> Result<String> {
        let request = build_request(&self.flattener, kind, node, all_nodes);
        tracing::info!(
            kind = ?request.kind,
            title = %request.title,
            chars = request.text.chars().count(),
            "sending text to generator"
        );
        self.generator.generate(&request)
    }
}
