//! Runtime catalog of embedded entries
//!
//! The catalog is the runtime view of a manifest: entries indexed by key,
//! and directory listings indexed by the directory's source path. Each file
//! entry decodes its payload lazily, at most once, and caches the outcome.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::error::{FsError, FsResult};
use super::metadata::AssetMetadata;
use crate::codec::{self, DecodeError};
use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::value_objects::Encoding;

/// Manifest shape that generated code embeds as a `static`.
#[derive(Debug)]
pub struct StaticManifest {
    pub encoding: Encoding,
    pub entries: &'static [StaticEntry],
}

/// One record of a [`StaticManifest`].
#[derive(Debug)]
pub enum StaticEntry {
    File {
        key: &'static str,
        name: &'static str,
        local: &'static str,
        size: u64,
        mod_time: i64,
        payload: &'static str,
    },
    Directory {
        key: &'static str,
        name: &'static str,
        local: &'static str,
        children: &'static [&'static str],
    },
}

/// Decode outcome, shared by every reader of the entry.
type Decoded = Result<Arc<[u8]>, DecodeError>;

#[derive(Debug)]
struct Payload {
    text: Cow<'static, str>,
    encoding: Encoding,
    decoded: OnceLock<Decoded>,
    decodes: AtomicUsize,
}

#[derive(Debug)]
enum EntryKind {
    File(Payload),
    Directory,
}

/// A file or directory in the catalog.
#[derive(Debug)]
pub struct CatalogEntry {
    key: Cow<'static, str>,
    name: Cow<'static, str>,
    local: Cow<'static, str>,
    size: u64,
    mod_time: i64,
    kind: EntryKind,
}

impl CatalogEntry {
    fn file(
        key: Cow<'static, str>,
        name: Cow<'static, str>,
        local: Cow<'static, str>,
        size: u64,
        mod_time: i64,
        payload: Cow<'static, str>,
        encoding: Encoding,
    ) -> Self {
        Self {
            key,
            name,
            local,
            size,
            mod_time,
            kind: EntryKind::File(Payload {
                text: payload,
                encoding,
                decoded: OnceLock::new(),
                decodes: AtomicUsize::new(0),
            }),
        }
    }

    fn directory(
        key: Cow<'static, str>,
        name: Cow<'static, str>,
        local: Cow<'static, str>,
    ) -> Self {
        Self {
            key,
            name,
            local,
            size: 0,
            mod_time: 0,
            kind: EntryKind::Directory,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source path the entry was bundled from.
    pub fn local_path(&self) -> &str {
        &self.local
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Metadata straight from the manifest; never decodes.
    pub fn metadata(&self) -> AssetMetadata {
        AssetMetadata::new(self.name.as_ref(), self.size, self.mod_time, self.is_dir())
    }

    /// Decoded content.
    ///
    /// The first caller decodes while concurrent callers wait; afterwards
    /// every caller gets the same cached bytes or the same cached error.
    pub fn contents(&self) -> FsResult<Arc<[u8]>> {
        let payload = match &self.kind {
            EntryKind::File(p) => p,
            EntryKind::Directory => return Err(FsError::IsADirectory(self.key.to_string())),
        };

        let outcome = payload.decoded.get_or_init(|| {
            payload.decodes.fetch_add(1, Ordering::Relaxed);
            debug!(key = %self.key, encoding = %payload.encoding, "decoding payload");
            codec::decode(&payload.text, payload.encoding).map(Arc::from)
        });

        outcome.clone().map_err(|source| FsError::Decode {
            key: self.key.to_string(),
            source,
        })
    }

    /// How many times the payload decoder ran (0 or 1).
    pub fn decode_count(&self) -> usize {
        match &self.kind {
            EntryKind::File(p) => p.decodes.load(Ordering::Relaxed),
            EntryKind::Directory => 0,
        }
    }
}

/// Key → entry and source path → listing, ready to serve.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, Arc<CatalogEntry>>,
    listings: HashMap<String, Vec<Arc<CatalogEntry>>>,
}

impl Catalog {
    /// Build from an owned manifest (copies the records).
    pub fn new(manifest: &Manifest) -> Self {
        let encoding = manifest.encoding();
        let mut catalog = Self::default();

        for file in manifest.files() {
            catalog.insert(CatalogEntry::file(
                file.key().as_str().to_string().into(),
                file.base_name().to_string().into(),
                file.local_path().to_string().into(),
                file.size(),
                file.mod_time(),
                file.payload().to_string().into(),
                encoding,
            ));
        }
        for dir in manifest.directories() {
            catalog.insert(CatalogEntry::directory(
                dir.key().as_str().to_string().into(),
                dir.base_name().to_string().into(),
                dir.local_path().to_string().into(),
            ));
        }
        for dir in manifest.directories() {
            let children = manifest
                .listing(dir.local_path())
                .unwrap_or_default()
                .iter()
                .map(ManifestEntry::key)
                .collect::<Vec<_>>();
            catalog.link(dir.local_path(), &children);
        }

        catalog
    }

    /// Build from a manifest embedded in generated code (no copies).
    pub fn from_static(manifest: &'static StaticManifest) -> Self {
        let mut catalog = Self::default();

        for entry in manifest.entries {
            catalog.insert(match entry {
                StaticEntry::File {
                    key,
                    name,
                    local,
                    size,
                    mod_time,
                    payload,
                } => CatalogEntry::file(
                    Cow::Borrowed(*key),
                    Cow::Borrowed(*name),
                    Cow::Borrowed(*local),
                    *size,
                    *mod_time,
                    Cow::Borrowed(*payload),
                    manifest.encoding,
                ),
                StaticEntry::Directory {
                    key, name, local, ..
                } => CatalogEntry::directory(
                    Cow::Borrowed(*key),
                    Cow::Borrowed(*name),
                    Cow::Borrowed(*local),
                ),
            });
        }
        for entry in manifest.entries {
            if let StaticEntry::Directory {
                local, children, ..
            } = entry
            {
                catalog.link(local, children);
            }
        }

        catalog
    }

    pub fn get(&self, key: &str) -> Option<&Arc<CatalogEntry>> {
        self.entries.get(key)
    }

    /// Children of the directory bundled from `local`.
    pub fn listing(&self, local: &str) -> Option<&[Arc<CatalogEntry>]> {
        self.listings.get(local).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.key.to_string(), Arc::new(entry));
    }

    /// Children that do not resolve are skipped.
    fn link(&mut self, local: &str, children: &[&str]) {
        let resolved = children
            .iter()
            .filter_map(|key| self.entries.get(*key).cloned())
            .collect();
        self.listings.insert(local.to_string(), resolved);
    }
}
