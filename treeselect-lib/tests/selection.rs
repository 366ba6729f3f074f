//! Tests for single and flat multiple selection.

use treeselect_lib::index::IndexedForest;
use treeselect_lib::model::{SelectionValue, TreeNode};
use treeselect_lib::selection::{SelectionEngine, SelectionMode};

fn forest() -> IndexedForest {
    IndexedForest::build(&[
        TreeNode::new("p", "P")
            .child(TreeNode::new("x", "X"))
            .child(TreeNode::new("y", "Y")),
        TreeNode::new("q", "Q"),
    ])
    .unwrap()
}

#[test]
fn test_mode_from_flags() {
    assert_eq!(SelectionMode::from_flags(false, false), SelectionMode::Single);
    assert_eq!(SelectionMode::from_flags(true, false), SelectionMode::Multiple);
    assert_eq!(SelectionMode::from_flags(false, true), SelectionMode::Cascade);
    assert_eq!(SelectionMode::from_flags(true, true), SelectionMode::Cascade);
}

#[test]
fn test_single_replaces_selection() {
    let forest = forest();
    let mut engine = SelectionEngine::new(SelectionMode::Single);
    engine.check(&forest, forest.get("x").unwrap());
    engine.check(&forest, forest.get("y").unwrap());
    assert_eq!(engine.commit(&forest), SelectionValue::from("y"));
    assert!(!engine.is_checked(&forest, forest.get("x").unwrap()));
}

#[test]
fn test_single_uncheck_only_clears_matching_value() {
    let forest = forest();
    let mut engine = SelectionEngine::new(SelectionMode::Single);
    engine.check(&forest, forest.get("x").unwrap());
    engine.uncheck(&forest, forest.get("y").unwrap());
    assert_eq!(engine.commit(&forest), SelectionValue::from("x"));
    engine.uncheck(&forest, forest.get("x").unwrap());
    assert_eq!(engine.commit(&forest), SelectionValue::None);
}

#[test]
fn test_single_does_not_inherit() {
    let forest = forest();
    let mut engine = SelectionEngine::new(SelectionMode::Single);
    engine.check(&forest, forest.get("p").unwrap());
    assert!(!engine.is_checked(&forest, forest.get("x").unwrap()));
    assert!(!engine.is_indeterminate(&forest, forest.get("p").unwrap()));
}

#[test]
fn test_multiple_appends_in_order() {
    let forest = forest();
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    for value in ["q", "x", "q", "p"] {
        engine.check(&forest, forest.get(value).unwrap());
    }
    assert_eq!(engine.commit(&forest), SelectionValue::from(vec!["q", "x", "p"]));
}

#[test]
fn test_multiple_has_no_propagation() {
    let forest = forest();
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.check(&forest, forest.get("x").unwrap());
    engine.check(&forest, forest.get("y").unwrap());
    assert!(!engine.is_checked(&forest, forest.get("p").unwrap()));
    assert!(!engine.is_indeterminate(&forest, forest.get("p").unwrap()));
    assert_eq!(engine.checked_count(&forest, forest.get("p").unwrap()), 2);

    engine.uncheck(&forest, forest.get("x").unwrap());
    assert_eq!(engine.commit(&forest), SelectionValue::from(vec!["y"]));
}

#[test]
fn test_hydrate_normalizes_shape() {
    let forest = forest();

    let mut single = SelectionEngine::new(SelectionMode::Single);
    single.hydrate(&forest, &SelectionValue::from(vec!["y", "x"]));
    assert_eq!(single.commit(&forest), SelectionValue::from("y"));

    let mut multiple = SelectionEngine::new(SelectionMode::Multiple);
    multiple.hydrate(&forest, &SelectionValue::from("q"));
    assert_eq!(multiple.commit(&forest), SelectionValue::from(vec!["q"]));

    multiple.hydrate(&forest, &SelectionValue::None);
    assert_eq!(multiple.commit(&forest), SelectionValue::Many(vec![]));
}

#[test]
fn test_clear() {
    let forest = forest();
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.check(&forest, forest.get("x").unwrap());
    engine.clear();
    assert!(engine.checked_values().is_empty());
    assert_eq!(engine.mode(), SelectionMode::Multiple);
}
