//! Cascading tree-select engine
//!
//! Indexing, selection propagation, search and drill-down navigation for a
//! hierarchical multi-select picker. Rendering is left to the host: the
//! [`picker::TreeSelect`] controller produces plain rows and consumes user
//! actions.

pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod navigation;
pub mod picker;
pub mod search;
pub mod selection;

pub use config::TreeSelectConfig;
pub use error::{ConfigError, Result, TreeError, ValidationError};
pub use model::{SelectionValue, TreeNode};
pub use picker::{Row, TreeSelect};
