//! Selection engine.

use crate::index::{IndexedForest, NodeId};
use crate::model::SelectionValue;

use super::cascade;
use super::checked::CheckedSet;
use super::mode::SelectionMode;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SelectionState {
    Single(Option<String>),
    Multiple(Vec<String>),
    /// Working set: explicit checks plus values added by closure.
    Cascade(CheckedSet),
}

impl SelectionState {
    fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
            SelectionMode::Cascade => Self::Cascade(CheckedSet::new()),
        }
    }
}

/// Holds the current selection and applies check/uncheck transitions.
///
/// In cascade mode there are two ways a node can be checked: its value is in
/// the working set, or any ancestor's value is. [`is_checked`](Self::is_checked)
/// consults both, and ancestor inheritance wins even where the working set
/// has drifted from a minimal cover (after unchecking a promoted parent the
/// descendants' values are still recorded). [`commit`](Self::commit) emits the
/// minimal cover rather than the working set.
///
/// # Example
///
/// ```
/// use treeselect_lib::index::IndexedForest;
/// use treeselect_lib::model::{SelectionValue, TreeNode};
/// use treeselect_lib::selection::{SelectionEngine, SelectionMode};
///
/// let forest = IndexedForest::build(&[
///     TreeNode::new("a", "A").child(TreeNode::new("b", "B")),
/// ]).unwrap();
/// let b = forest.get("b").unwrap();
///
/// let mut engine = SelectionEngine::new(SelectionMode::Cascade);
/// engine.check(&forest, b);
/// assert_eq!(engine.commit(&forest), SelectionValue::from(vec!["a"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    mode: SelectionMode,
    state: SelectionState,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

impl SelectionEngine {
    /// Create an engine with nothing selected.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            state: SelectionState::empty(mode),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.state = SelectionState::empty(self.mode);
    }

    /// Re-derive the selection from an external value.
    ///
    /// Single mode takes the first value of a list. Multiple modes accept a
    /// lone value as a one-element list. Cascade mode also adds every
    /// descendant of each supplied value, so the working set is closed
    /// downward; it does not promote.
    pub fn hydrate(&mut self, forest: &IndexedForest, value: &SelectionValue) {
        self.state = match self.mode {
            SelectionMode::Single => {
                SelectionState::Single(value.values().first().map(|v| v.to_string()))
            }
            SelectionMode::Multiple => {
                let mut values: Vec<String> = Vec::with_capacity(value.len());
                for v in value.values() {
                    if !values.iter().any(|existing| existing == v) {
                        values.push(v.to_string());
                    }
                }
                SelectionState::Multiple(values)
            }
            SelectionMode::Cascade => {
                let mut set: CheckedSet = value.values().into_iter().collect();
                for v in value.values() {
                    match forest.get(v) {
                        Some(id) => cascade::close_downward(forest, id, &mut set),
                        None => log::warn!("Hydrated value '{}' is not in the forest", v),
                    }
                }
                SelectionState::Cascade(set)
            }
        };
        log::debug!("Hydrated {:?} selection from {:?}", self.mode, value);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Whether a node renders as checked.
    pub fn is_checked(&self, forest: &IndexedForest, id: NodeId) -> bool {
        let value = forest[id].value.as_str();
        match &self.state {
            SelectionState::Single(selected) => selected.as_deref() == Some(value),
            SelectionState::Multiple(selected) => selected.iter().any(|v| v == value),
            SelectionState::Cascade(checked) => {
                checked.contains(value)
                    || forest
                        .ancestors(id)
                        .any(|a| checked.contains(&forest[a].value))
            }
        }
    }

    /// Whether a node renders as partially checked.
    ///
    /// Only cascade mode has an indeterminate state: some, but not all, of the
    /// node's direct children are in the working set.
    pub fn is_indeterminate(&self, forest: &IndexedForest, id: NodeId) -> bool {
        let SelectionState::Cascade(checked) = &self.state else {
            return false;
        };
        let children = &forest[id].children_value;
        let count = children.iter().filter(|c| checked.contains(c)).count();
        count > 0 && count < children.len()
    }

    /// Number of strict descendants of a node that render as checked.
    pub fn checked_count(&self, forest: &IndexedForest, id: NodeId) -> usize {
        forest
            .descendants(id)
            .filter(|&d| self.is_checked(forest, d))
            .count()
    }

    /// The raw working state, in order.
    ///
    /// For cascade mode this is the working set, not what
    /// [`commit`](Self::commit) emits.
    pub fn checked_values(&self) -> Vec<&str> {
        match &self.state {
            SelectionState::Single(selected) => selected.as_deref().into_iter().collect(),
            SelectionState::Multiple(selected) => selected.iter().map(String::as_str).collect(),
            SelectionState::Cascade(checked) => checked.iter().collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Check a node.
    pub fn check(&mut self, forest: &IndexedForest, id: NodeId) {
        let value = forest[id].value.as_str();
        log::debug!("Check '{}' ({:?})", value, self.mode);
        match &mut self.state {
            SelectionState::Single(selected) => *selected = Some(value.to_string()),
            SelectionState::Multiple(selected) => {
                if !selected.iter().any(|v| v == value) {
                    selected.push(value.to_string());
                }
            }
            SelectionState::Cascade(checked) => {
                let mut candidate = checked.clone();
                candidate.insert(value);
                cascade::close_downward(forest, id, &mut candidate);
                cascade::promote(forest, &mut candidate);
                *checked = candidate;
            }
        }
    }

    /// Uncheck a node.
    ///
    /// In cascade mode this removes the node and all of its ancestors from the
    /// working set. Descendant values are left as they were.
    pub fn uncheck(&mut self, forest: &IndexedForest, id: NodeId) {
        let value = forest[id].value.as_str();
        log::debug!("Uncheck '{}' ({:?})", value, self.mode);
        match &mut self.state {
            SelectionState::Single(selected) => {
                if selected.as_deref() == Some(value) {
                    *selected = None;
                }
            }
            SelectionState::Multiple(selected) => selected.retain(|v| v != value),
            SelectionState::Cascade(checked) => {
                let chain: Vec<&str> = std::iter::once(id)
                    .chain(forest.ancestors(id))
                    .map(|n| forest[n].value.as_str())
                    .collect();
                let removed = checked.remove_where(|v| chain.contains(&v));
                log::trace!("Uncheck removed {} values", removed);
            }
        }
    }

    /// Flip a node's checked state. Returns the new state.
    pub fn toggle(&mut self, forest: &IndexedForest, id: NodeId) -> bool {
        if self.is_checked(forest, id) {
            self.uncheck(forest, id);
            false
        } else {
            self.check(forest, id);
            true
        }
    }

    // -------------------------------------------------------------------------
    // Emission
    // -------------------------------------------------------------------------

    /// The value reported to the host on confirmation.
    pub fn commit(&self, forest: &IndexedForest) -> SelectionValue {
        let value = match &self.state {
            SelectionState::Single(selected) => SelectionValue::from(selected.clone()),
            SelectionState::Multiple(selected) => SelectionValue::Many(selected.clone()),
            SelectionState::Cascade(checked) => {
                SelectionValue::Many(cascade::minimal_cover(forest, checked))
            }
        };
        log::debug!("Commit {:?}", value);
        value
    }
}
