//! Forest validation error types

/// Structural problems found while indexing a forest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two nodes share the same `value`.
    #[error("Duplicate value '{value}' at {first} and {second}")]
    DuplicateValue {
        value: String,
        /// Sibling-index path of the first occurrence.
        first: NodePath,
        /// Sibling-index path of the offending occurrence.
        second: NodePath,
    },

    /// A node has an empty `value`.
    #[error("Empty value at {path}")]
    EmptyValue { path: NodePath },
}

/// Sibling-index path from a root to a node, used to locate bad input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(pub Vec<usize>);

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}
