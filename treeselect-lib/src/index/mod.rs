//! Forest indexing.
//!
//! The host supplies an owned forest of [`TreeNode`](crate::model::TreeNode)s.
//! Indexing flattens it into an [`IndexedForest`] arena where every node knows
//! its parent (as a [`NodeId`], never an owning link) and the ordered values of
//! its children. All traversals over the arena are iterative.

mod forest;
mod indexer;
mod walk;

pub use forest::{IndexedForest, IndexedNode, NodeId};
pub use indexer::TreeIndexer;
pub use walk::{Ancestors, Descendants};
