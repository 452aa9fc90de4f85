//! Open a document, check a title, read its text.

use std::collections::HashSet;

use legis::domain::ports::NodeRepository;
use legis::{
    build_forest, filter_relevant, FileNodeRepository, FlattenMode, Flattener, Node, NodeId,
    NodeKind, Selection, SelectionManager, SelectionSession, SelectionState,
};

use crate::common::{constitution, write_nodes, DOCUMENT};

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

#[test]
fn checking_a_title_selects_everything_beneath_it() {
    let nodes = vec![
        Node::new("A", NodeKind::Title, "Title I"),
        Node::new("B", NodeKind::Article, "Art. 1")
            .with_parent("A")
            .with_content("Text B"),
        Node::new("C", NodeKind::Paragraph, "§1")
            .with_parent("B")
            .with_content("Text C"),
    ];
    let forest = build_forest(&nodes);
    let manager = SelectionManager::default();

    let selection = manager.toggle(&Selection::new(), &forest[0], true);

    let expected: HashSet<NodeId> = [id("A"), id("B"), id("C")].into_iter().collect();
    assert_eq!(selection.iter().cloned().collect::<HashSet<_>>(), expected);

    let text = Flattener::default().flatten(&nodes[0], &nodes, FlattenMode::Full);
    assert_eq!(text.content, "Art. 1\nText B\n\n§1\nText C");
}

#[test]
fn subsection_heading_is_printed_once() {
    let nodes = vec![
        Node::new("S", NodeKind::Subsection, "General Provisions")
            .with_content("General Provisions"),
        Node::new("A", NodeKind::Article, "Art. 5")
            .with_parent("S")
            .with_content("Everyone is equal."),
    ];
    let flattener = Flattener::default();

    let from_subsection = flattener.flatten(&nodes[0], &nodes, FlattenMode::Full).content;
    assert_eq!(from_subsection.matches("General Provisions").count(), 0);

    let parent = Node::new("C", NodeKind::Chapter, "Chapter I");
    let mut with_parent = vec![parent.clone()];
    with_parent.extend(nodes.iter().cloned().map(|n| {
        if n.id == id("S") {
            n.with_parent("C")
        } else {
            n
        }
    }));
    let from_chapter = flattener.flatten(&parent, &with_parent, FlattenMode::Full).content;
    assert_eq!(from_chapter.matches("General Provisions").count(), 1);
}

#[test]
fn two_chapters_drive_the_title_checkbox() {
    let mut session = SelectionSession::default();
    session.open(DOCUMENT, constitution());

    session.toggle(&id("c1"), true);
    assert_eq!(session.state(&id("t1")), Some(SelectionState::Indeterminate));

    // c2 reaches its subsection and article through the cascade
    session.toggle(&id("c2"), true);
    assert_eq!(session.state(&id("t1")), Some(SelectionState::Unchecked));
    assert!(session.selection().contains(&id("a2")));

    let title = legis::domain::entities::find_in_forest(session.forest(), &id("t1")).unwrap();
    assert!(session.manager().is_fully_checked(session.selection(), title));
    assert_eq!(session.selected_roots(), vec![id("c1"), id("c2")]);
}

#[test]
fn latest_cascade_wins_between_title_and_chapter() {
    let mut session = SelectionSession::default();
    session.open(DOCUMENT, constitution());

    session.toggle(&id("t1"), true);
    session.toggle(&id("c1"), false);
    assert!(session.selection().contains(&id("t1")));
    assert!(!session.selection().contains(&id("p1")));

    session.toggle(&id("t1"), true);
    assert!(session.selection().contains(&id("p1")));

    session.toggle(&id("c1"), true);
    session.toggle(&id("t1"), false);
    assert!(session.selection().is_empty());
}

#[test]
fn focus_keeps_ancestors_and_subtree() {
    let forest = build_forest(&constitution());
    let interesting: HashSet<NodeId> = [id("a1")].into_iter().collect();

    let filtered = filter_relevant(&forest, &interesting);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id(), &id("t1"));
    assert_eq!(filtered[0].children.len(), 1);
    assert_eq!(filtered[0].children[0].children[0].children[0].id(), &id("p1"));
}

#[test]
fn document_loaded_from_yaml_file_matches_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let mut nodes = constitution();
    nodes.push(Node::new("x", NodeKind::Book, "Other law").with_document("cc02"));
    let path = write_nodes(dir.path(), "nodes.yaml", &nodes);

    let repository = FileNodeRepository::new(&path);
    let loaded = repository.nodes_for_document(DOCUMENT).unwrap();
    assert_eq!(loaded, constitution());

    let mut session = SelectionSession::default();
    session.open_from(&repository, DOCUMENT).unwrap();
    let roots: Vec<&str> = session.forest().iter().map(|t| t.id().as_str()).collect();
    assert_eq!(roots, vec!["t1", "t2"]);
}

#[test]
fn display_pane_shows_notice_for_long_text() {
    let nodes = constitution();
    let title = nodes.iter().find(|n| n.id == id("t1")).unwrap();
    let flattener = Flattener::default().with_display_max_chars(20);

    let display = flattener.flatten(title, &nodes, FlattenMode::Display);
    let full = flattener.flatten(title, &nodes, FlattenMode::Full);

    assert!(display.truncated);
    assert_eq!(display.content.chars().count(), 23);
    assert!(full.content.starts_with(display.content.trim_end_matches("...")));
    assert_eq!(
        display.notice().unwrap(),
        format!(
            "Showing 20 of {} characters; the full text is used for generation.",
            full.total_length
        )
    );
}
