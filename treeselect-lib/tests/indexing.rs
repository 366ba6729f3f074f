//! Tests for forest indexing.

use std::sync::Arc;

use treeselect_lib::error::{NodePath, ValidationError};
use treeselect_lib::index::{IndexedForest, TreeIndexer};
use treeselect_lib::model::TreeNode;

fn forest() -> Vec<TreeNode> {
    vec![
        TreeNode::new("a", "A")
            .child(
                TreeNode::new("b", "B")
                    .child(TreeNode::new("c", "C"))
                    .child(TreeNode::new("d", "D")),
            )
            .child(TreeNode::new("e", "E")),
        TreeNode::new("f", "F"),
    ]
}

#[test]
fn test_children_value_matches_children() {
    let indexed = IndexedForest::build(&forest()).unwrap();
    assert_eq!(indexed.node_by_value("a").unwrap().children_value, ["b", "e"]);
    assert_eq!(indexed.node_by_value("b").unwrap().children_value, ["c", "d"]);
    assert!(indexed.node_by_value("c").unwrap().children_value.is_empty());
}

#[test]
fn test_parent_links() {
    let indexed = IndexedForest::build(&forest()).unwrap();
    let c = indexed.get("c").unwrap();
    assert_eq!(indexed.parent_value(c), Some("b"));
    let a = indexed.get("a").unwrap();
    assert_eq!(indexed.parent(a), None);
}

#[test]
fn test_ancestors_nearest_first() {
    let indexed = IndexedForest::build(&forest()).unwrap();
    let d = indexed.get("d").unwrap();
    let values: Vec<_> = indexed
        .ancestors(d)
        .map(|id| indexed[id].value.as_str())
        .collect();
    assert_eq!(values, ["b", "a"]);
}

#[test]
fn test_descendants_preorder() {
    let indexed = IndexedForest::build(&forest()).unwrap();
    let a = indexed.get("a").unwrap();
    let values: Vec<_> = indexed
        .descendants(a)
        .map(|id| indexed[id].value.as_str())
        .collect();
    assert_eq!(values, ["b", "c", "d", "e"]);
    let f = indexed.get("f").unwrap();
    assert_eq!(indexed.descendants(f).count(), 0);
}

#[test]
fn test_empty_forest() {
    let indexed = IndexedForest::build(&[]).unwrap();
    assert!(indexed.is_empty());
    assert!(indexed.roots().is_empty());
}

#[test]
fn test_reindex_is_identical() {
    let first = IndexedForest::build(&forest()).unwrap();
    let second = IndexedForest::build(&forest()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_value_rejected() {
    let raw = vec![
        TreeNode::new("a", "A").child(TreeNode::new("x", "X")),
        TreeNode::new("x", "X again"),
    ];
    let err = IndexedForest::build(&raw).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateValue {
            value: "x".into(),
            first: NodePath(vec![0, 0]),
            second: NodePath(vec![1]),
        }
    );
    assert!(err.to_string().contains("[0.0]"));
}

#[test]
fn test_empty_value_rejected() {
    let raw = vec![TreeNode::new("a", "A").child(TreeNode::untitled(""))];
    let err = IndexedForest::build(&raw).unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyValue {
            path: NodePath(vec![0, 0])
        }
    );
}

#[test]
fn test_deep_chain_does_not_recurse() {
    let mut node = TreeNode::new("n0", "N0");
    for depth in 1..20_000 {
        node = TreeNode::new(format!("n{}", depth), "deep").child(node);
    }
    let raw = vec![node];
    let indexed = IndexedForest::build(&raw).unwrap();
    let leaf = indexed.get("n0").unwrap();
    assert_eq!(indexed.ancestors(leaf).count(), 19_999);
    drop(raw);
    drop(indexed);
}

#[test]
fn test_indexer_memoizes_by_identity() {
    let source: Arc<[TreeNode]> = Arc::from(forest());
    let mut indexer = TreeIndexer::new();
    assert!(indexer.index(&source).unwrap());
    assert!(!indexer.index(&Arc::clone(&source)).unwrap());

    let same_content: Arc<[TreeNode]> = Arc::from(forest());
    assert!(indexer.index(&same_content).unwrap());
    assert_eq!(indexer.forest().len(), 6);
}

#[test]
fn test_indexer_keeps_previous_index_on_error() {
    let source: Arc<[TreeNode]> = Arc::from(forest());
    let mut indexer = TreeIndexer::new();
    indexer.index(&source).unwrap();

    let bad: Arc<[TreeNode]> = Arc::from(vec![TreeNode::new("a", "A"), TreeNode::new("a", "A")]);
    assert!(indexer.index(&bad).is_err());
    assert_eq!(indexer.forest().len(), 6);
}

#[test]
fn test_deserialize_host_shape() {
    let raw: Vec<TreeNode> = serde_json::from_str(
        r#"[{ "title": "Root", "value": "r", "code": "R-1",
              "children": [{ "title": "Kid", "value": "k", "id": "42" }] }]"#,
    )
    .unwrap();
    let indexed = IndexedForest::build(&raw).unwrap();
    let root = indexed.node_by_value("r").unwrap();
    assert_eq!(root.attr("code"), Some("R-1"));
    assert_eq!(indexed.node_by_value("k").unwrap().id.as_deref(), Some("42"));
}
