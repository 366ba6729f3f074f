//! Memoized indexing keyed by forest identity.

use std::sync::Arc;

use crate::error::ValidationError;
use crate::model::TreeNode;

use super::forest::IndexedForest;

/// Re-indexes a forest only when the supplied forest is a different allocation.
///
/// Identity is pointer identity of the `Arc`, mirroring how a host hands the
/// same forest reference back on every render. Re-indexing always replaces
/// the whole [`IndexedForest`]; it never patches the previous one.
#[derive(Debug, Default)]
pub struct TreeIndexer {
    source: Option<Arc<[TreeNode]>>,
    forest: Arc<IndexedForest>,
}

impl TreeIndexer {
    /// Create an indexer holding an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `source` unless it is the forest indexed last time.
    ///
    /// Returns `true` if a new index was built. On a validation error the
    /// previous index is kept.
    pub fn index(&mut self, source: &Arc<[TreeNode]>) -> Result<bool, ValidationError> {
        if let Some(current) = &self.source
            && Arc::ptr_eq(current, source)
        {
            log::trace!("Forest unchanged, reusing index");
            return Ok(false);
        }

        let forest = IndexedForest::build(source)?;
        self.forest = Arc::new(forest);
        self.source = Some(Arc::clone(source));
        Ok(true)
    }

    /// The current index.
    pub fn forest(&self) -> &Arc<IndexedForest> {
        &self.forest
    }

    /// The raw forest the current index was built from.
    pub fn source(&self) -> Option<&Arc<[TreeNode]>> {
        self.source.as_ref()
    }
}
