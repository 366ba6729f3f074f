//! Picker configuration

use serde::{Deserialize, Serialize};

use crate::search::{FilterField, MatchStrategy, SearchFilter};
use crate::selection::SelectionMode;

/// Host-supplied picker options.
///
/// Field names deserialize from the host's camelCase props; every field is
/// optional.
///
/// # Example
///
/// ```
/// use treeselect_lib::config::TreeSelectConfig;
/// use treeselect_lib::selection::SelectionMode;
///
/// let config = TreeSelectConfig::default()
///     .with_label("Regions")
///     .with_tree_checkable(true);
/// assert_eq!(config.selection_mode(), SelectionMode::Cascade);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeSelectConfig {
    /// Hint shown in the closed input when nothing is selected.
    ///
    /// Default: "Please select"
    pub placeholder: String,

    /// Picker title.
    ///
    /// Default: "Tree select"
    pub label: String,

    /// Whether the search bar is available.
    ///
    /// Default: true
    pub show_search: bool,

    /// Flat multi-select.
    pub multiple: bool,

    /// Cascading checkbox-tree selection. Implies `multiple`.
    pub tree_checkable: bool,

    /// Node attribute searched.
    ///
    /// Default: `title`
    pub tree_node_filter_prop: FilterField,

    /// How search terms match.
    ///
    /// Default: substring
    pub match_strategy: MatchStrategy,
}

impl Default for TreeSelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Please select".to_string(),
            label: "Tree select".to_string(),
            show_search: true,
            multiple: false,
            tree_checkable: false,
            tree_node_filter_prop: FilterField::default(),
            match_strategy: MatchStrategy::default(),
        }
    }
}

impl TreeSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_show_search(mut self, show_search: bool) -> Self {
        self.show_search = show_search;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_tree_checkable(mut self, tree_checkable: bool) -> Self {
        self.tree_checkable = tree_checkable;
        self
    }

    pub fn with_filter_prop(mut self, field: impl Into<FilterField>) -> Self {
        self.tree_node_filter_prop = field.into();
        self
    }

    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    /// Selection mode implied by `multiple` and `tree_checkable`.
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_flags(self.multiple, self.tree_checkable)
    }

    /// Search filter for the configured field and strategy.
    pub fn search_filter(&self) -> SearchFilter {
        SearchFilter::new(self.tree_node_filter_prop.clone(), self.match_strategy)
    }
}
