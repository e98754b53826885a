//! Filesystem backends
//!
//! [`AssetFs`] is the tagged variant the application talks to: two backing
//! stores plus one prefix-scoping decorator.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::trace;

use super::catalog::{Catalog, CatalogEntry};
use super::error::{FsError, FsResult};
use super::handle::{AssetHandle, EmbeddedHandle, LocalHandle};
use crate::domain::value_objects::canonicalize;

/// A virtual filesystem over a catalog.
#[derive(Debug, Clone)]
pub enum AssetFs {
    /// Proxies to the source files on disk
    Local(LocalFs),
    /// Serves the embedded payloads
    Embedded(EmbeddedFs),
    /// Prefixes every name before delegating
    Directory(DirectoryView),
}

impl AssetFs {
    pub fn open(&self, name: &str) -> FsResult<AssetHandle> {
        match self {
            AssetFs::Local(fs) => fs.open(name).map(AssetHandle::Local),
            AssetFs::Embedded(fs) => fs.open(name).map(AssetHandle::Embedded),
            AssetFs::Directory(view) => view.open(name),
        }
    }

    /// Whole content of `name`.
    pub fn read(&self, name: &str) -> FsResult<Arc<[u8]>> {
        match self {
            AssetFs::Local(fs) => fs.read(name),
            AssetFs::Embedded(fs) => fs.read(name),
            AssetFs::Directory(view) => view.inner.read(&view.scoped(name)),
        }
    }

    /// Whole content of `name` as UTF-8 text.
    pub fn read_to_string(&self, name: &str) -> FsResult<String> {
        let bytes = self.read(name)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| FsError::InvalidUtf8(name.to_string()))
    }

    /// Scope this filesystem under `prefix`.
    pub fn scoped(self, prefix: impl Into<String>) -> AssetFs {
        AssetFs::Directory(DirectoryView::new(self, prefix))
    }
}

/// Local-backed filesystem. No caching, every open hits the disk.
#[derive(Debug, Clone)]
pub struct LocalFs {
    catalog: Arc<Catalog>,
}

impl LocalFs {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Source path of the entry named `name`.
    pub fn local_path(&self, name: &str) -> FsResult<PathBuf> {
        Ok(PathBuf::from(lookup(&self.catalog, name)?.local_path()))
    }

    pub fn open(&self, name: &str) -> FsResult<LocalHandle> {
        let path = self.local_path(name)?;
        trace!(requested = name, path = %path.display(), "open local");
        LocalHandle::open(path)
    }

    pub fn read(&self, name: &str) -> FsResult<Arc<[u8]>> {
        let mut handle = self.open(name)?;
        let mut buf = Vec::new();
        let read = handle.read_to_end(&mut buf);
        handle.close()?;
        read?;
        Ok(buf.into())
    }
}

/// Embedded-backed filesystem serving decoded payloads.
#[derive(Debug, Clone)]
pub struct EmbeddedFs {
    catalog: Arc<Catalog>,
}

impl EmbeddedFs {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn open(&self, name: &str) -> FsResult<EmbeddedHandle> {
        let entry = lookup(&self.catalog, name)?;
        trace!(requested = name, key = entry.key(), "open embedded");
        Ok(EmbeddedHandle::new(entry.clone(), self.catalog.clone()))
    }

    pub fn read(&self, name: &str) -> FsResult<Arc<[u8]>> {
        lookup(&self.catalog, name)?.contents()
    }

    /// Catalog entry for `name`, if present.
    pub fn entry(&self, name: &str) -> Option<&Arc<CatalogEntry>> {
        lookup(&self.catalog, name).ok()
    }
}

/// Forwards `open(name)` to the inner filesystem as `open(prefix + name)`.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    inner: Box<AssetFs>,
    prefix: String,
}

impl DirectoryView {
    pub fn new(inner: AssetFs, prefix: impl Into<String>) -> Self {
        Self {
            inner: Box::new(inner),
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn open(&self, name: &str) -> FsResult<AssetHandle> {
        self.inner.open(&self.scoped(name))
    }

    fn scoped(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

fn lookup<'a>(catalog: &'a Catalog, name: &str) -> FsResult<&'a Arc<CatalogEntry>> {
    let key = canonicalize(name, "");
    catalog
        .get(key.as_str())
        .ok_or_else(|| FsError::NotFound(key.into_string()))
}
