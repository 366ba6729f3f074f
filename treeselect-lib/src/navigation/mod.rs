//! Drill-down navigation with a breadcrumb trail.

use crate::index::{IndexedForest, NodeId};

/// The list currently browsed and how it was reached.
///
/// The breadcrumb stores sibling positions, not node identities, so the
/// displayed list is always re-resolved against the forest by replaying the
/// breadcrumb from the roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    breadcrumb: Vec<usize>,
    /// Node whose children are displayed; `None` displays the roots.
    current: Option<NodeId>,
}

impl NavigationStack {
    /// Start at the roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed list.
    pub fn displayed<'a>(&self, forest: &'a IndexedForest) -> &'a [NodeId] {
        match self.current {
            Some(id) => forest.children(id),
            None => forest.roots(),
        }
    }

    /// Node whose children are displayed, if not at the roots.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Sibling positions taken from the roots.
    pub fn breadcrumb(&self) -> &[usize] {
        &self.breadcrumb
    }

    pub fn depth(&self) -> usize {
        self.breadcrumb.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.breadcrumb.is_empty()
    }

    /// Nodes along the breadcrumb, root first.
    pub fn trail(&self, forest: &IndexedForest) -> Vec<NodeId> {
        (1..=self.breadcrumb.len())
            .filter_map(|depth| forest.resolve_path(&self.breadcrumb[..depth]))
            .collect()
    }

    /// Descend into the children of the node at `index` in the displayed list.
    ///
    /// Leaves and out-of-range indices leave the stack unchanged. Returns
    /// whether the stack moved.
    pub fn drill_into(&mut self, forest: &IndexedForest, index: usize) -> bool {
        let Some(&id) = self.displayed(forest).get(index) else {
            log::warn!("Drill index {} out of range", index);
            return false;
        };
        if !forest[id].has_children() {
            log::debug!("Not drilling into leaf '{}'", forest[id].value);
            return false;
        }
        self.breadcrumb.push(index);
        self.current = Some(id);
        log::debug!("Drilled into '{}' (depth {})", forest[id].value, self.depth());
        true
    }

    /// Keep the first `depth` breadcrumb entries and re-resolve the list.
    ///
    /// A breadcrumb that no longer resolves against the forest resets to the
    /// roots.
    pub fn drill_to(&mut self, forest: &IndexedForest, depth: usize) {
        self.breadcrumb.truncate(depth);
        if self.breadcrumb.is_empty() {
            self.current = None;
            return;
        }
        match forest.resolve_path(&self.breadcrumb) {
            Some(id) => self.current = Some(id),
            None => {
                log::warn!("Breadcrumb {:?} no longer resolves", self.breadcrumb);
                self.reset();
            }
        }
    }

    /// Jump straight to the children of `id`, rebuilding the breadcrumb from
    /// the node's own path. Leaves leave the stack unchanged.
    pub fn navigate_to(&mut self, forest: &IndexedForest, id: NodeId) -> bool {
        if !forest[id].has_children() {
            return false;
        }
        self.breadcrumb = forest.path_of(id).0;
        self.current = Some(id);
        true
    }

    /// Back to the roots.
    pub fn reset(&mut self) {
        if !self.breadcrumb.is_empty() {
            log::debug!("Navigation reset");
        }
        self.breadcrumb.clear();
        self.current = None;
    }
}
