//! Asset directory entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AssetKey;

/// An embedded directory record.
///
/// `children` are keys of other manifest entries, not owned records; they
/// are resolved through the manifest when a listing is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDirectory {
    key: AssetKey,
    name: String,
    local: String,
    children: Vec<AssetKey>,
}

impl AssetDirectory {
    /// Children are sorted on construction.
    pub fn new(key: AssetKey, local: impl Into<String>, mut children: Vec<AssetKey>) -> Self {
        children.sort();
        Self {
            name: key.base_name().to_string(),
            key,
            local: local.into(),
            children,
        }
    }

    pub fn key(&self) -> &AssetKey {
        &self.key
    }

    pub fn base_name(&self) -> &str {
        &self.name
    }

    pub fn local_path(&self) -> &str {
        &self.local
    }

    pub fn child_keys(&self) -> &[AssetKey] {
        &self.children
    }

    /// Keep the children `keep` accepts, in sorted order.
    pub(crate) fn retain_children(&mut self, mut keep: impl FnMut(&AssetKey) -> bool) {
        self.children.retain(|k| keep(k));
        self.children.sort();
    }
}
