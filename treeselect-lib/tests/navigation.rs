//! Tests for drill-down navigation.

use treeselect_lib::index::{IndexedForest, NodeId};
use treeselect_lib::model::TreeNode;
use treeselect_lib::navigation::NavigationStack;

fn forest() -> IndexedForest {
    IndexedForest::build(&[
        TreeNode::new("a", "A").child(TreeNode::new("a0", "A0")),
        TreeNode::new("b", "B")
            .child(TreeNode::new("b0", "B0"))
            .child(
                TreeNode::new("b1", "B1")
                    .child(TreeNode::new("b1x", "B1X").child(TreeNode::new("b1x0", "B1X0"))),
            ),
    ])
    .unwrap()
}

fn values<'a>(forest: &'a IndexedForest, ids: &[NodeId]) -> Vec<&'a str> {
    ids.iter().map(|&id| forest[id].value.as_str()).collect()
}

#[test]
fn test_starts_at_roots() {
    let forest = forest();
    let nav = NavigationStack::new();
    assert!(nav.is_at_root());
    assert_eq!(values(&forest, nav.displayed(&forest)), ["a", "b"]);
}

#[test]
fn test_drill_into_pushes_index() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    assert!(nav.drill_into(&forest, 1));
    assert!(nav.drill_into(&forest, 1));
    assert_eq!(nav.breadcrumb(), [1, 1]);
    assert_eq!(values(&forest, nav.displayed(&forest)), ["b1x"]);
    assert_eq!(values(&forest, &nav.trail(&forest)), ["b", "b1"]);
}

#[test]
fn test_drill_into_leaf_is_noop() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    nav.drill_into(&forest, 1);
    assert!(!nav.drill_into(&forest, 0));
    assert_eq!(nav.breadcrumb(), [1]);
}

#[test]
fn test_drill_into_out_of_range_is_noop() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    assert!(!nav.drill_into(&forest, 7));
    assert!(nav.is_at_root());
}

#[test]
fn test_drill_to_replays_breadcrumb() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    nav.drill_into(&forest, 1);
    nav.drill_into(&forest, 1);
    nav.drill_into(&forest, 0);
    assert_eq!(values(&forest, nav.displayed(&forest)), ["b1x0"]);

    nav.drill_to(&forest, 2);
    assert_eq!(nav.breadcrumb(), [1, 1]);
    assert_eq!(values(&forest, nav.displayed(&forest)), ["b1x"]);

    nav.drill_to(&forest, 1);
    assert_eq!(values(&forest, nav.displayed(&forest)), ["b0", "b1"]);

    nav.drill_to(&forest, 0);
    assert!(nav.is_at_root());
    assert_eq!(values(&forest, nav.displayed(&forest)), ["a", "b"]);
}

#[test]
fn test_drill_to_deeper_than_breadcrumb_keeps_position() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    nav.drill_into(&forest, 0);
    nav.drill_to(&forest, 5);
    assert_eq!(nav.breadcrumb(), [0]);
    assert_eq!(values(&forest, nav.displayed(&forest)), ["a0"]);
}

#[test]
fn test_stale_breadcrumb_resets() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    nav.drill_into(&forest, 1);
    nav.drill_into(&forest, 1);

    let smaller = IndexedForest::build(&[TreeNode::new("z", "Z")]).unwrap();
    nav.drill_to(&smaller, 2);
    assert!(nav.is_at_root());
    assert_eq!(values(&smaller, nav.displayed(&smaller)), ["z"]);
}

#[test]
fn test_navigate_to_builds_real_path() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    assert!(nav.navigate_to(&forest, forest.get("b1x").unwrap()));
    assert_eq!(nav.breadcrumb(), [1, 1, 0]);
    assert_eq!(values(&forest, nav.displayed(&forest)), ["b1x0"]);
    assert!(!nav.navigate_to(&forest, forest.get("b1x0").unwrap()));
}

#[test]
fn test_reset() {
    let forest = forest();
    let mut nav = NavigationStack::new();
    nav.drill_into(&forest, 0);
    nav.reset();
    assert!(nav.is_at_root());
    assert_eq!(nav.current(), None);
}
