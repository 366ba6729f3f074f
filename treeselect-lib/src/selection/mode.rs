//! Selection modes.

use serde::{Deserialize, Serialize};

/// How the picker selects nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// At most one value.
    #[default]
    Single,
    /// Any number of values, no propagation between nodes.
    Multiple,
    /// Checkbox-tree: checks propagate down by inheritance and up by promotion.
    Cascade,
}

impl SelectionMode {
    /// Derive the mode from the host's `multiple` / `treeCheckable` flags.
    ///
    /// `tree_checkable` forces multiple semantics.
    pub fn from_flags(multiple: bool, tree_checkable: bool) -> Self {
        match (multiple, tree_checkable) {
            (_, true) => Self::Cascade,
            (true, false) => Self::Multiple,
            (false, false) => Self::Single,
        }
    }

    /// Whether more than one value may be selected.
    pub fn is_multiple(self) -> bool {
        !matches!(self, Self::Single)
    }
}
