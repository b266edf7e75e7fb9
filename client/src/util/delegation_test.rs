use super::*;

/// Flat arena of `(id, parent index)` pairs standing in for a DOM tree.
struct Tree {
    nodes: Vec<(&'static str, Option<usize>)>,
}

#[derive(Clone, Copy)]
struct Node<'a> {
    tree: &'a Tree,
    index: usize,
}

impl DelegationNode for Node<'_> {
    fn has_id(&self, id: &str) -> bool {
        self.tree.nodes[self.index].0 == id
    }

    fn parent(&self) -> Option<Self> {
        self.tree.nodes[self.index]
            .1
            .map(|index| Node { tree: self.tree, index })
    }
}

impl Tree {
    fn node(&self, index: usize) -> Node<'_> {
        Node { tree: self, index }
    }
}

/// body > nav > button#sidebarToggle > span > svg ; body > main > p
fn page() -> Tree {
    Tree {
        nodes: vec![
            ("", None),
            ("", Some(0)),
            ("sidebarToggle", Some(1)),
            ("", Some(2)),
            ("", Some(3)),
            ("content", Some(0)),
            ("", Some(5)),
        ],
    }
}

#[test]
fn target_itself_matches() {
    let tree = page();
    let found = closest_with_id(tree.node(2), "sidebarToggle").map(|n| n.index);
    assert_eq!(found, Some(2));
}

#[test]
fn nested_descendant_matches_enclosing_control() {
    let tree = page();
    assert_eq!(closest_with_id(tree.node(4), "sidebarToggle").map(|n| n.index), Some(2));
    assert!(is_within(tree.node(3), "sidebarToggle"));
}

#[test]
fn click_elsewhere_does_not_match() {
    let tree = page();
    assert!(!is_within(tree.node(6), "sidebarToggle"));
    assert!(!is_within(tree.node(1), "sidebarToggle"));
    assert!(!is_within(tree.node(0), "sidebarToggle"));
}

#[test]
fn empty_id_never_matches() {
    let tree = page();
    assert!(!is_within(tree.node(4), ""));
}

#[test]
fn missing_control_never_matches() {
    let tree = Tree { nodes: vec![("", None), ("", Some(0))] };
    assert!(!is_within(tree.node(1), "sidebarToggle"));
}

#[test]
fn is_target_requires_exact_element() {
    let tree = page();
    assert!(is_target(Some(tree.node(2)), "sidebarToggle"));
    assert!(!is_target(Some(tree.node(3)), "sidebarToggle"));
    assert!(!is_target(Some(tree.node(4)), "sidebarToggle"));
}

#[test]
fn is_target_rejects_missing_target_and_empty_id() {
    let tree = page();
    assert!(!is_target(None::<Node<'_>>, "sidebarToggle"));
    assert!(!is_target(Some(tree.node(0)), ""));
}
