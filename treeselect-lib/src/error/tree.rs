//! Crate-level error type

use super::{ConfigError, ValidationError};

/// Result alias for tree-select operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Top-level error for tree-select operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid forest: {0}")]
    Validation(#[from] ValidationError),

    /// An operation addressed a node by value and no such node exists.
    #[error("No node with value '{0}'")]
    UnknownValue(String),
}
