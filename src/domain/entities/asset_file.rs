//! Asset file entities
//!
//! `SourceFile` is what the walker reads off disk; `AssetFile` is the
//! encoded record that ends up in the manifest. Raw bytes never leave the
//! build.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AssetKey;

/// A file read during the bundling pass, content still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    key: AssetKey,
    local_path: String,
    content: Vec<u8>,
    mod_time: i64,
}

impl SourceFile {
    /// # Arguments
    /// - `key` - Canonical key
    /// - `local_path` - Source path in forward-slash form
    /// - `content` - Raw bytes
    /// - `mod_time` - Unix seconds (already overridden if configured)
    pub fn new(
        key: AssetKey,
        local_path: impl Into<String>,
        content: Vec<u8>,
        mod_time: i64,
    ) -> Self {
        Self {
            key,
            local_path: local_path.into(),
            content,
            mod_time,
        }
    }

    pub fn key(&self) -> &AssetKey {
        &self.key
    }

    pub fn base_name(&self) -> &str {
        self.key.base_name()
    }

    pub fn local_path(&self) -> &str {
        &self.local_path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn mod_time(&self) -> i64 {
        self.mod_time
    }

    /// Turn into a manifest record once the payload has been encoded.
    pub fn into_asset(self, payload: String) -> AssetFile {
        AssetFile {
            name: self.key.base_name().to_string(),
            size: self.content.len() as u64,
            key: self.key,
            local: self.local_path,
            mod_time: self.mod_time,
            payload,
        }
    }
}

/// An embedded file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFile {
    key: AssetKey,
    name: String,
    local: String,
    size: u64,
    mod_time: i64,
    payload: String,
}

impl AssetFile {
    pub fn new(
        key: AssetKey,
        local: impl Into<String>,
        size: u64,
        mod_time: i64,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            name: key.base_name().to_string(),
            key,
            local: local.into(),
            size,
            mod_time,
            payload: payload.into(),
        }
    }

    pub fn key(&self) -> &AssetKey {
        &self.key
    }

    pub fn base_name(&self) -> &str {
        &self.name
    }

    /// Original source path (forward-slash form).
    pub fn local_path(&self) -> &str {
        &self.local
    }

    /// Byte length of the raw content.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mod_time(&self) -> i64 {
        self.mod_time
    }

    /// Chunked base64 text, see [`crate::codec`].
    pub fn payload(&self) -> &str {
        &self.payload
    }
}
