//! Search configuration types.

use serde::{Deserialize, Serialize};

/// Which node attribute a search matches against.
///
/// `value`, `title` and `id` name the built-in fields; anything else names an
/// extra attribute carried on the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterField(String);

impl FilterField {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn title() -> Self {
        Self::new("title")
    }

    pub fn value() -> Self {
        Self::new("value")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FilterField {
    fn default() -> Self {
        Self::title()
    }
}

impl From<&str> for FilterField {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a search term is compared with the filter field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStrategy {
    /// Case-sensitive substring containment.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match via nucleo.
    Fuzzy,
}
