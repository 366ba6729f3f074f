//! Search over the whole indexed forest.
//!
//! A search flattens every matching node into a [`SearchHit`] carrying the
//! titles of its ancestors, so a result can be told apart from same-named
//! nodes elsewhere in the tree.

mod field;
mod filter;

pub use field::{FilterField, MatchStrategy};
pub use filter::{SearchFilter, SearchHit, DESCRIPTION_SEPARATOR};
