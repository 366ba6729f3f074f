//! Raw forest elements as supplied by the host

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A forest element in the host's shape.
///
/// Deserializes from `{ "value": .., "title": .., "id": .., "children": [..] }`.
/// Any other attributes are kept in [`extra`](Self::extra) so a search can be
/// pointed at them.
///
/// # Example
///
/// ```
/// use treeselect_lib::model::TreeNode;
///
/// let forest = vec![
///     TreeNode::new("fruit", "Fruit")
///         .child(TreeNode::new("apple", "Apple"))
///         .child(TreeNode::new("pear", "Pear")),
/// ];
/// assert_eq!(forest[0].children.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Identifier, unique across the whole forest.
    pub value: String,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Stable render key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owned children; empty marks a leaf. `null` reads as empty.
    #[serde(
        default,
        deserialize_with = "nullable_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<TreeNode>,
    /// Remaining host attributes.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TreeNode {
    /// Create a node with a value and title.
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: Some(title.into()),
            id: None,
            children: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Create a node with only a value.
    pub fn untitled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: None,
            id: None,
            children: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Add a child node.
    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, nodes: Vec<TreeNode>) -> Self {
        self.children = nodes;
        self
    }

    /// Set the render key.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach an extra string attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra
            .insert(key.into(), serde_json::Value::String(value.into()));
        self
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Derived drop glue recurses once per level; unnest the children first.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

fn nullable_children<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TreeNode>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_children_is_leaf() {
        let node: TreeNode =
            serde_json::from_str(r#"{ "value": "a", "title": "A", "children": null }"#).unwrap();
        assert!(node.is_leaf());
        assert!(node.extra.is_empty());
    }

    #[test]
    fn test_missing_children_is_leaf() {
        let node: TreeNode = serde_json::from_str(r#"{ "value": "a" }"#).unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.title, None);
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node = TreeNode::untitled("n0");
        for depth in 1..200_000 {
            node = TreeNode::untitled(format!("n{}", depth)).child(node);
        }
        drop(node);
    }
}
