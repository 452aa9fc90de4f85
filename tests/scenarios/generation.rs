//! Hand the complete text of a subtree to a text generator.

use std::cell::RefCell;

use anyhow::Result;

use legis::application::GenerationUseCase;
use legis::domain::ports::{GenerationKind, GenerationRequest, TextGenerator};
use legis::{Flattener, NodeId};

use crate::common::constitution;

#[derive(Default)]
struct FakeGenerator {
    requests: RefCell<Vec<GenerationRequest>>,
}

impl TextGenerator for &FakeGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        Ok(format!("{} questions about {}", request.text.len(), request.title))
    }
}

#[test]
fn generator_receives_uncapped_text() {
    let nodes = constitution();
    let title = nodes.iter().find(|n| n.id == NodeId::from("t1")).unwrap();
    let generator = FakeGenerator::default();
    let flattener = Flattener::default().with_display_max_chars(10);
    let use_case = GenerationUseCase::new(&generator, flattener);

    let reply = use_case
        .execute(GenerationKind::Questions, title, &nodes)
        .unwrap();

    let requests = generator.requests.borrow();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.kind, GenerationKind::Questions);
    assert_eq!(request.title, "Title I - Fundamental Principles");
    assert!(request.text.ends_with("Everyone is equal before the law."));
    assert!(!request.text.ends_with("..."));
    assert!(reply.ends_with("Title I - Fundamental Principles"));
}
