//! Host document loading.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use treeselect_lib::{SelectionValue, TreeNode, TreeSelect, TreeSelectConfig};

/// The demo tree shipped with the binary.
pub const DEMO: &str = include_str!("../fixtures/demo.json");

/// Everything a host page passes to the picker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDocument {
    #[serde(flatten)]
    pub config: TreeSelectConfig,
    #[serde(default)]
    pub tree_data: Vec<TreeNode>,
    #[serde(default)]
    pub value: SelectionValue,
}

impl HostDocument {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse host document")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("Invalid host document {}", path.display()))
    }

    pub fn demo() -> anyhow::Result<Self> {
        Self::parse(DEMO)
    }

    /// Build a picker hydrated with the document's value.
    pub fn into_picker(self) -> anyhow::Result<TreeSelect> {
        let forest: Arc<[TreeNode]> = Arc::from(self.tree_data);
        let picker = TreeSelect::with_value(forest, self.config, self.value)?;
        Ok(picker)
    }
}
