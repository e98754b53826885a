//! Manifest entity - the finalized, immutable set of embedded records
//!
//! Built once by [`crate::domain::services::ManifestBuilder`]; there are no
//! mutating accessors. Serialized as JSON for external renderers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{AssetDirectory, AssetFile};
use crate::domain::services::ManifestBuilder;
use crate::domain::value_objects::{Encoding, FunctionNaming};
use crate::error::EmbedError;

/// A resolved manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestEntry<'a> {
    File(&'a AssetFile),
    Directory(&'a AssetDirectory),
}

impl<'a> ManifestEntry<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            ManifestEntry::File(f) => f.key().as_str(),
            ManifestEntry::Directory(d) => d.key().as_str(),
        }
    }

    pub fn local_path(&self) -> &'a str {
        match self {
            ManifestEntry::File(f) => f.local_path(),
            ManifestEntry::Directory(d) => d.local_path(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, ManifestEntry::Directory(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    File(usize),
    Directory(usize),
}

/// Finalized collection of file and directory records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ManifestData", into = "ManifestData")]
pub struct Manifest {
    encoding: Encoding,
    naming: FunctionNaming,
    files: Vec<AssetFile>,
    directories: Vec<AssetDirectory>,
    by_key: HashMap<String, Slot>,
    by_local: HashMap<String, usize>,
}

impl Manifest {
    /// Records must already be sorted, unique and have resolvable children.
    pub(crate) fn assemble(
        encoding: Encoding,
        naming: FunctionNaming,
        files: Vec<AssetFile>,
        directories: Vec<AssetDirectory>,
    ) -> Self {
        let mut by_key = HashMap::with_capacity(files.len() + directories.len());
        for (idx, file) in files.iter().enumerate() {
            by_key.insert(file.key().as_str().to_string(), Slot::File(idx));
        }
        let mut by_local = HashMap::with_capacity(directories.len());
        for (idx, dir) in directories.iter().enumerate() {
            by_key.insert(dir.key().as_str().to_string(), Slot::Directory(idx));
            by_local.insert(dir.local_path().to_string(), idx);
        }

        Self {
            encoding,
            naming,
            files,
            directories,
            by_key,
            by_local,
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn naming(&self) -> FunctionNaming {
        self.naming
    }

    /// Files sorted by key.
    pub fn files(&self) -> &[AssetFile] {
        &self.files
    }

    /// Directories sorted by key.
    pub fn directories(&self) -> &[AssetDirectory] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an entry by canonical key.
    pub fn get(&self, key: &str) -> Option<ManifestEntry<'_>> {
        self.by_key.get(key).map(|slot| match *slot {
            Slot::File(idx) => ManifestEntry::File(&self.files[idx]),
            Slot::Directory(idx) => ManifestEntry::Directory(&self.directories[idx]),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Resolved children of the directory whose source path is `local`.
    pub fn listing(&self, local: &str) -> Option<Vec<ManifestEntry<'_>>> {
        let dir = &self.directories[*self.by_local.get(local)?];
        Some(
            dir.child_keys()
                .iter()
                .filter_map(|k| self.get(k.as_str()))
                .collect(),
        )
    }
}

impl PartialEq for Manifest {
    fn eq(&self, other: &Self) -> bool {
        self.encoding == other.encoding
            && self.naming == other.naming
            && self.files == other.files
            && self.directories == other.directories
    }
}

impl Eq for Manifest {}

/// Serialized form of a [`Manifest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ManifestData {
    #[serde(default)]
    encoding: Encoding,
    #[serde(default)]
    naming: FunctionNaming,
    #[serde(default)]
    files: Vec<AssetFile>,
    #[serde(default)]
    directories: Vec<AssetDirectory>,
}

impl TryFrom<ManifestData> for Manifest {
    type Error = EmbedError;

    fn try_from(data: ManifestData) -> Result<Self, Self::Error> {
        ManifestBuilder::new(data.encoding, data.naming).build(data.files, data.directories)
    }
}

impl From<Manifest> for ManifestData {
    fn from(manifest: Manifest) -> Self {
        Self {
            encoding: manifest.encoding,
            naming: manifest.naming,
            files: manifest.files,
            directories: manifest.directories,
        }
    }
}
