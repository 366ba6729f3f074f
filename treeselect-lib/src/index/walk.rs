//! Iterative traversals over an indexed forest.

use super::forest::{IndexedForest, NodeId};

/// Strict ancestors of a node, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    forest: &'a IndexedForest,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    pub(super) fn new(forest: &'a IndexedForest, id: NodeId) -> Self {
        Self {
            forest,
            next: forest.parent(id),
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.forest.parent(current);
        Some(current)
    }
}

/// Strict descendants of a node, in preorder.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    forest: &'a IndexedForest,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(super) fn new(forest: &'a IndexedForest, id: NodeId) -> Self {
        let stack = forest.children(id).iter().rev().copied().collect();
        Self { forest, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        self.stack
            .extend(self.forest.children(current).iter().rev().copied());
        Some(current)
    }
}
