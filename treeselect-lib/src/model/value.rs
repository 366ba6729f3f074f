//! Selection value exchanged with the host

use serde::{Deserialize, Serialize};

/// The external selection value.
///
/// The host passes one of these in to hydrate the picker and receives one on
/// confirmation. Single mode uses [`One`](Self::One) or [`None`](Self::None);
/// multiple and cascade modes use [`Many`](Self::Many).
///
/// Serializes the way the host expects: `null`, a string, or an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    /// Nothing selected.
    #[default]
    None,
    /// A single selected value.
    One(String),
    /// An ordered sequence of selected values.
    Many(Vec<String>),
}

impl SelectionValue {
    /// All values, in order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::None => Vec::new(),
            Self::One(v) => vec![v.as_str()],
            Self::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    /// Consume into an owned list of values.
    pub fn into_values(self) -> Vec<String> {
        match self {
            Self::None => Vec::new(),
            Self::One(v) => vec![v],
            Self::Many(vs) => vs,
        }
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Many(vs) => vs.len(),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text shown in the closed picker input: values joined with `,`.
    pub fn display(&self) -> String {
        self.values().join(",")
    }
}

impl From<&str> for SelectionValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for SelectionValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Option<String>> for SelectionValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::None, Self::One)
    }
}

impl From<Vec<String>> for SelectionValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for SelectionValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(String::from).collect())
    }
}
