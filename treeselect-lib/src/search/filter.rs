//! Search filter.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::index::{IndexedForest, NodeId};

use super::field::{FilterField, MatchStrategy};

/// Joins ancestor titles in a hit's description.
pub const DESCRIPTION_SEPARATOR: &str = " - ";

/// A node matched by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub node: NodeId,
    /// Ancestor titles from the root down to the direct parent.
    /// Empty for a root.
    pub description: String,
    /// Fuzzy match score (higher is better). `None` for substring matches.
    pub score: Option<u32>,
}

/// Matches nodes of an indexed forest against a term.
///
/// # Example
///
/// ```
/// use treeselect_lib::index::IndexedForest;
/// use treeselect_lib::model::TreeNode;
/// use treeselect_lib::search::SearchFilter;
///
/// let forest = IndexedForest::build(&[
///     TreeNode::new("1", "Fruit").child(TreeNode::new("2", "Apple")),
/// ]).unwrap();
///
/// let hits = SearchFilter::default().search(&forest, "App");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].description, "Fruit");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    field: FilterField,
    strategy: MatchStrategy,
}

impl SearchFilter {
    pub fn new(field: FilterField, strategy: MatchStrategy) -> Self {
        Self { field, strategy }
    }

    pub fn field(&self) -> &FilterField {
        &self.field
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Every node whose filter field matches `term`, in preorder.
    ///
    /// A parent and its descendants are matched independently. Nodes missing
    /// the filter field never match. An empty term matches every node that
    /// has the field.
    pub fn search(&self, forest: &IndexedForest, term: &str) -> Vec<SearchHit> {
        let mut fuzzy = match self.strategy {
            MatchStrategy::Substring => None,
            MatchStrategy::Fuzzy => Some((
                Matcher::new(Config::DEFAULT),
                Pattern::new(
                    term,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                ),
            )),
        };
        let mut buf = Vec::new();

        let hits: Vec<SearchHit> = forest
            .iter()
            .filter_map(|(id, node)| {
                let haystack = node.attr(self.field.as_str())?;
                let score = match &mut fuzzy {
                    None if haystack.contains(term) => None,
                    None => return None,
                    Some((matcher, pattern)) => {
                        let haystack = Utf32Str::new(haystack, &mut buf);
                        Some(pattern.score(haystack, matcher)?)
                    }
                };
                Some(SearchHit {
                    node: id,
                    description: describe(forest, id),
                    score,
                })
            })
            .collect();

        log::trace!(
            "Search '{}' on {} ({:?}): {} hits",
            term,
            self.field,
            self.strategy,
            hits.len()
        );
        hits
    }
}

/// Ancestor titles, root first, joined with [`DESCRIPTION_SEPARATOR`].
fn describe(forest: &IndexedForest, id: NodeId) -> String {
    let mut titles: Vec<&str> = forest
        .ancestors(id)
        .map(|a| forest[a].title.as_deref().unwrap_or(""))
        .collect();
    titles.reverse();
    titles.join(DESCRIPTION_SEPARATOR)
}
