//! Arena storage for an indexed forest.

use std::collections::{BTreeMap, HashMap};

use crate::error::{NodePath, ValidationError};
use crate::model::TreeNode;

use super::walk::{Ancestors, Descendants};

/// Handle to a node inside an [`IndexedForest`].
///
/// Only meaningful for the forest that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in preorder.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node annotated with its relations.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedNode {
    pub value: String,
    pub title: Option<String>,
    pub id: Option<String>,
    /// Direct parent; `None` at forest roots.
    pub parent: Option<NodeId>,
    /// Direct children in order.
    pub children: Vec<NodeId>,
    /// Ordered values of the direct children.
    pub children_value: Vec<String>,
    /// Depth in the forest (0 = root).
    pub depth: usize,
    /// Position within the parent's (or the root) sibling list.
    pub position: usize,
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl IndexedNode {
    /// Title, falling back to the value when the node has none.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.value)
    }

    /// Whether this node has children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Look up a string attribute by name.
    ///
    /// `value`, `title` and `id` resolve to the built-in fields; any other
    /// name resolves to an extra attribute holding a string.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match name {
            "value" => Some(&self.value),
            "title" => self.title.as_deref(),
            "id" => self.id.as_deref(),
            other => self.extra.get(other).and_then(serde_json::Value::as_str),
        }
    }
}

/// An indexed forest.
///
/// Nodes are stored in preorder. Lookups by value are O(1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedForest {
    nodes: Vec<IndexedNode>,
    roots: Vec<NodeId>,
    by_value: HashMap<String, NodeId>,
}

impl IndexedForest {
    /// An empty forest.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index a raw forest, rejecting duplicate or empty values.
    pub fn build(source: &[TreeNode]) -> Result<Self, ValidationError> {
        let mut forest = Self::default();

        // (node, parent, position); children are pushed reversed so they pop in order.
        let mut stack: Vec<(&TreeNode, Option<NodeId>, usize)> = source
            .iter()
            .enumerate()
            .rev()
            .map(|(position, node)| (node, None, position))
            .collect();

        while let Some((raw, parent, position)) = stack.pop() {
            let id = NodeId(forest.nodes.len());
            let depth = parent.map_or(0, |p| forest.nodes[p.0].depth + 1);

            forest.nodes.push(IndexedNode {
                value: raw.value.clone(),
                title: raw.title.clone(),
                id: raw.id.clone(),
                parent,
                children: Vec::with_capacity(raw.children.len()),
                children_value: raw.children.iter().map(|c| c.value.clone()).collect(),
                depth,
                position,
                extra: raw.extra.clone(),
            });

            if raw.value.is_empty() {
                return Err(ValidationError::EmptyValue {
                    path: forest.path_of(id),
                });
            }
            if let Some(&first) = forest.by_value.get(&raw.value) {
                return Err(ValidationError::DuplicateValue {
                    value: raw.value.clone(),
                    first: forest.path_of(first),
                    second: forest.path_of(id),
                });
            }
            forest.by_value.insert(raw.value.clone(), id);

            match parent {
                Some(p) => forest.nodes[p.0].children.push(id),
                None => forest.roots.push(id),
            }

            for (child_position, child) in raw.children.iter().enumerate().rev() {
                stack.push((child, Some(id), child_position));
            }
        }

        log::debug!(
            "Indexed forest: {} nodes, {} roots",
            forest.nodes.len(),
            forest.roots.len()
        );
        Ok(forest)
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root nodes in order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Access a node by handle.
    pub fn node(&self, id: NodeId) -> &IndexedNode {
        &self.nodes[id.0]
    }

    /// Resolve a value to its node handle.
    pub fn get(&self, value: &str) -> Option<NodeId> {
        self.by_value.get(value).copied()
    }

    /// Resolve a value to its node.
    pub fn node_by_value(&self, value: &str) -> Option<&IndexedNode> {
        self.get(value).map(|id| self.node(id))
    }

    /// Whether a value names a node in this forest.
    pub fn contains(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    /// Direct parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Value of the direct parent of a node.
    pub fn parent_value(&self, id: NodeId) -> Option<&str> {
        self.parent(id).map(|p| self.node(p).value.as_str())
    }

    /// Direct children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The sibling list a node belongs to.
    pub fn siblings(&self, id: NodeId) -> &[NodeId] {
        match self.parent(id) {
            Some(p) => self.children(p),
            None => &self.roots,
        }
    }

    /// Strict ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, id)
    }

    /// Strict descendants of a node, in preorder.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// All nodes in preorder.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &IndexedNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Sibling-index path from the root list down to a node.
    pub fn path_of(&self, id: NodeId) -> NodePath {
        let mut path: Vec<usize> = std::iter::once(id)
            .chain(self.ancestors(id))
            .map(|n| self.node(n).position)
            .collect();
        path.reverse();
        NodePath(path)
    }

    /// Follow a sibling-index path from the roots.
    ///
    /// Returns `None` if any step is out of range.
    pub fn resolve_path(&self, path: &[usize]) -> Option<NodeId> {
        let (&first, rest) = path.split_first()?;
        let mut current = *self.roots.get(first)?;
        for &index in rest {
            current = *self.children(current).get(index)?;
        }
        Some(current)
    }
}

impl std::ops::Index<NodeId> for IndexedForest {
    type Output = IndexedNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.node(id)
    }
}
