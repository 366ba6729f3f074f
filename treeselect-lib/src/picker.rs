//! Headless picker controller.
//!
//! [`TreeSelect`] wires the indexer, selection engine, search filter and
//! navigation stack together the way the picker screen uses them, and hands
//! the renderer plain [`Row`]s.

use std::sync::Arc;

use crate::config::TreeSelectConfig;
use crate::error::{ConfigError, Result, TreeError};
use crate::index::{IndexedForest, IndexedNode, NodeId, TreeIndexer};
use crate::model::{SelectionValue, TreeNode};
use crate::navigation::NavigationStack;
use crate::search::{SearchFilter, SearchHit};
use crate::selection::{SelectionEngine, SelectionMode};

/// One render-ready line of the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub node: NodeId,
    pub value: String,
    /// Title, or the value for untitled nodes.
    pub title: String,
    pub checked: bool,
    pub indeterminate: bool,
    /// Whether tapping the row drills into it.
    pub has_children: bool,
    /// Checked descendants, shown on rows with children in multiple modes.
    pub checked_count: Option<usize>,
    /// Ancestor path, only while searching.
    pub description: Option<String>,
}

/// A tree-select picker without a renderer.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use treeselect_lib::config::TreeSelectConfig;
/// use treeselect_lib::model::{SelectionValue, TreeNode};
/// use treeselect_lib::picker::TreeSelect;
///
/// let forest: Arc<[TreeNode]> = Arc::from(vec![
///     TreeNode::new("a", "A").child(TreeNode::new("b", "B")),
/// ]);
/// let mut picker = TreeSelect::new(forest, TreeSelectConfig::default()).unwrap();
///
/// picker.open().unwrap();
/// picker.drill_into(0);
/// picker.check("b").unwrap();
/// assert_eq!(picker.confirm(), SelectionValue::from("b"));
/// assert_eq!(picker.display_value(), "b");
/// ```
#[derive(Debug)]
pub struct TreeSelect {
    config: TreeSelectConfig,
    filter: SearchFilter,
    indexer: TreeIndexer,
    engine: SelectionEngine,
    navigation: NavigationStack,
    /// The external value, as last hydrated or confirmed.
    value: SelectionValue,
    search: String,
    hits: Vec<SearchHit>,
    visible: bool,
    display: String,
}

impl TreeSelect {
    /// Create a picker over `forest`.
    ///
    /// Fails if the forest has duplicate or empty values. An empty forest is
    /// accepted here and reported by [`open`](Self::open).
    pub fn new(forest: Arc<[TreeNode]>, config: TreeSelectConfig) -> Result<Self> {
        let mut indexer = TreeIndexer::new();
        indexer.index(&forest)?;
        let engine = SelectionEngine::new(config.selection_mode());
        Ok(Self {
            filter: config.search_filter(),
            config,
            indexer,
            engine,
            navigation: NavigationStack::new(),
            value: SelectionValue::None,
            search: String::new(),
            hits: Vec::new(),
            visible: false,
            display: String::new(),
        })
    }

    /// Create a picker and hydrate it from an initial value.
    pub fn with_value(
        forest: Arc<[TreeNode]>,
        config: TreeSelectConfig,
        value: SelectionValue,
    ) -> Result<Self> {
        let mut picker = Self::new(forest, config)?;
        picker.set_value(value);
        Ok(picker)
    }

    pub fn config(&self) -> &TreeSelectConfig {
        &self.config
    }

    pub fn mode(&self) -> SelectionMode {
        self.engine.mode()
    }

    /// The current index.
    pub fn forest(&self) -> &IndexedForest {
        self.indexer.forest()
    }

    /// The underlying selection engine.
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    // -------------------------------------------------------------------------
    // Host inputs
    // -------------------------------------------------------------------------

    /// Replace the forest.
    ///
    /// Handing back the same `Arc` is a no-op. A different forest is
    /// re-indexed, navigation returns to the roots and the selection is
    /// re-derived from the current value.
    pub fn set_forest(&mut self, forest: Arc<[TreeNode]>) -> Result<()> {
        if !self.indexer.index(&forest)? {
            return Ok(());
        }
        self.navigation.reset();
        self.refresh_hits();
        self.engine.hydrate(self.indexer.forest(), &self.value);
        Ok(())
    }

    /// Replace the external value and re-derive the selection from it.
    pub fn set_value(&mut self, value: SelectionValue) {
        self.engine.hydrate(self.indexer.forest(), &value);
        self.display = value.display();
        self.value = value;
    }

    /// The external value.
    pub fn value(&self) -> &SelectionValue {
        &self.value
    }

    // -------------------------------------------------------------------------
    // Closed input
    // -------------------------------------------------------------------------

    /// Text shown in the closed input.
    ///
    /// Empty when nothing is selected; the renderer shows the placeholder.
    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Open the picker.
    ///
    /// With an empty forest the picker stays closed and the display text is
    /// replaced by the error message.
    pub fn open(&mut self) -> std::result::Result<(), ConfigError> {
        if self.forest().is_empty() {
            let error = ConfigError::EmptyForest;
            log::warn!("Cannot open picker: {}", error);
            self.display = error.to_string();
            return Err(error);
        }
        self.visible = true;
        Ok(())
    }

    /// Close the picker without confirming.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Set the search term.
    ///
    /// Ignored when search is disabled. Any change returns navigation to the
    /// roots; an empty term goes back to browsing.
    pub fn set_search(&mut self, term: impl Into<String>) {
        if !self.config.show_search {
            log::debug!("Search disabled, ignoring term");
            return;
        }
        let term = term.into();
        if term == self.search {
            return;
        }
        self.search = term;
        self.navigation.reset();
        self.refresh_hits();
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    fn refresh_hits(&mut self) {
        self.hits = if self.search.is_empty() {
            Vec::new()
        } else {
            self.filter.search(self.indexer.forest(), &self.search)
        };
    }

    // -------------------------------------------------------------------------
    // Displayed list
    // -------------------------------------------------------------------------

    /// Nodes currently listed: search hits while searching, otherwise the
    /// navigation list.
    pub fn displayed(&self) -> Vec<NodeId> {
        if self.is_searching() {
            self.hits.iter().map(|h| h.node).collect()
        } else {
            self.navigation.displayed(self.forest()).to_vec()
        }
    }

    /// Render-ready rows for the displayed list.
    pub fn rows(&self) -> Vec<Row> {
        let forest = self.forest();
        let multiple = self.mode().is_multiple();
        let row = |id: NodeId, description: Option<String>| {
            let node = &forest[id];
            Row {
                node: id,
                value: node.value.clone(),
                title: node.label().to_string(),
                checked: self.engine.is_checked(forest, id),
                indeterminate: self.engine.is_indeterminate(forest, id),
                has_children: node.has_children(),
                checked_count: (multiple && node.has_children())
                    .then(|| self.engine.checked_count(forest, id)),
                description,
            }
        };

        if self.is_searching() {
            self.hits
                .iter()
                .map(|hit| row(hit.node, Some(hit.description.clone())))
                .collect()
        } else {
            self.navigation
                .displayed(forest)
                .iter()
                .map(|&id| row(id, None))
                .collect()
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Drill into the row at `index`.
    ///
    /// While searching, drilling into a hit clears the search and opens the
    /// hit's children with the breadcrumb set to its real path.
    pub fn drill_into(&mut self, index: usize) -> bool {
        if !self.is_searching() {
            return self.navigation.drill_into(self.indexer.forest(), index);
        }

        let Some(hit) = self.hits.get(index) else {
            log::warn!("Drill index {} out of range", index);
            return false;
        };
        let id = hit.node;
        if !self.forest()[id].has_children() {
            return false;
        }
        self.search.clear();
        self.hits.clear();
        self.navigation.navigate_to(self.indexer.forest(), id)
    }

    /// Return to breadcrumb depth `depth` (0 = roots).
    pub fn drill_to(&mut self, depth: usize) {
        self.navigation.drill_to(self.indexer.forest(), depth);
    }

    pub fn reset_navigation(&mut self) {
        self.navigation.reset();
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    /// Nodes along the breadcrumb, root first.
    pub fn breadcrumb(&self) -> Vec<&IndexedNode> {
        let forest = self.forest();
        self.navigation
            .trail(forest)
            .into_iter()
            .map(|id| &forest[id])
            .collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    fn resolve(&self, value: &str) -> Result<NodeId> {
        self.forest()
            .get(value)
            .ok_or_else(|| TreeError::UnknownValue(value.to_string()))
    }

    pub fn check(&mut self, value: &str) -> Result<()> {
        let id = self.resolve(value)?;
        self.engine.check(self.indexer.forest(), id);
        Ok(())
    }

    pub fn uncheck(&mut self, value: &str) -> Result<()> {
        let id = self.resolve(value)?;
        self.engine.uncheck(self.indexer.forest(), id);
        Ok(())
    }

    /// Flip a node's checked state. Returns the new state.
    pub fn toggle(&mut self, value: &str) -> Result<bool> {
        let id = self.resolve(value)?;
        Ok(self.engine.toggle(self.indexer.forest(), id))
    }

    pub fn is_checked(&self, value: &str) -> Result<bool> {
        let id = self.resolve(value)?;
        Ok(self.engine.is_checked(self.forest(), id))
    }

    /// Value that [`confirm`](Self::confirm) would report now.
    pub fn pending(&self) -> SelectionValue {
        self.engine.commit(self.forest())
    }

    /// Footer count of selected items.
    pub fn selected_count(&self) -> usize {
        self.pending().len()
    }

    /// Confirm the selection.
    ///
    /// The committed value becomes the external value, the selection is
    /// re-derived from it, and the picker closes.
    pub fn confirm(&mut self) -> SelectionValue {
        let committed = self.pending();
        log::debug!("Confirmed {:?}", committed);
        self.set_value(committed.clone());
        self.visible = false;
        committed
    }
}
