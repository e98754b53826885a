//! Open file and directory handles
//!
//! Handles implement `Read + Seek` for content and expose `stat`,
//! `read_dir` and `close`. Dropping a handle releases it as well.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;

use super::catalog::{Catalog, CatalogEntry};
use super::error::{FsError, FsResult};
use super::metadata::AssetMetadata;
use crate::infrastructure::fs::unix_seconds;

/// Apply `read_dir(count)` semantics to a full listing.
///
/// `count <= 0` returns everything; `count > 0` returns at most `count`
/// entries, or [`FsError::EndOfDirectory`] when there are none.
pub(crate) fn take_listing<T>(mut entries: Vec<T>, count: isize) -> FsResult<Vec<T>> {
    if count > 0 {
        if entries.is_empty() {
            return Err(FsError::EndOfDirectory);
        }
        entries.truncate(count as usize);
    }
    Ok(entries)
}

/// A handle returned by [`AssetFs::open`](super::AssetFs::open).
#[derive(Debug)]
pub enum AssetHandle {
    Embedded(EmbeddedHandle),
    Local(LocalHandle),
}

impl AssetHandle {
    pub fn stat(&self) -> FsResult<AssetMetadata> {
        match self {
            AssetHandle::Embedded(h) => Ok(h.stat()),
            AssetHandle::Local(h) => h.stat(),
        }
    }

    pub fn read_dir(&self, count: isize) -> FsResult<Vec<AssetMetadata>> {
        match self {
            AssetHandle::Embedded(h) => h.read_dir(count),
            AssetHandle::Local(h) => h.read_dir(count),
        }
    }

    /// Release the handle.
    pub fn close(self) -> FsResult<()> {
        match self {
            AssetHandle::Embedded(_) => Ok(()),
            AssetHandle::Local(h) => h.close(),
        }
    }
}

impl Read for AssetHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            AssetHandle::Embedded(h) => h.read(buf),
            AssetHandle::Local(h) => h.read(buf),
        }
    }
}

impl Seek for AssetHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            AssetHandle::Embedded(h) => h.seek(pos),
            AssetHandle::Local(h) => h.seek(pos),
        }
    }
}

/// Handle on a catalog entry. Content is decoded on first read or seek.
#[derive(Debug)]
pub struct EmbeddedHandle {
    entry: Arc<CatalogEntry>,
    catalog: Arc<Catalog>,
    cursor: Option<Cursor<Arc<[u8]>>>,
}

impl EmbeddedHandle {
    pub(crate) fn new(entry: Arc<CatalogEntry>, catalog: Arc<Catalog>) -> Self {
        Self {
            entry,
            catalog,
            cursor: None,
        }
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn stat(&self) -> AssetMetadata {
        self.entry.metadata()
    }

    pub fn read_dir(&self, count: isize) -> FsResult<Vec<AssetMetadata>> {
        if !self.entry.is_dir() {
            return Err(FsError::NotADirectory(self.entry.key().to_string()));
        }
        let listing = self
            .catalog
            .listing(self.entry.local_path())
            .ok_or_else(|| FsError::MissingListing(self.entry.key().to_string()))?;
        take_listing(listing.iter().map(|e| e.metadata()).collect(), count)
    }

    /// Full decoded content, shared with every other reader of the entry.
    pub fn contents(&self) -> FsResult<Arc<[u8]>> {
        self.entry.contents()
    }

    fn cursor(&mut self) -> io::Result<&mut Cursor<Arc<[u8]>>> {
        if self.cursor.is_none() {
            self.cursor = Some(Cursor::new(self.entry.contents()?));
        }
        self.cursor
            .as_mut()
            .ok_or_else(|| io::Error::other("cursor not initialized"))
    }
}

impl Read for EmbeddedHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor()?.read(buf)
    }
}

impl Seek for EmbeddedHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor()?.seek(pos)
    }
}

/// Handle on a real file or directory.
#[derive(Debug)]
pub struct LocalHandle {
    path: PathBuf,
    file: Option<File>,
}

impl LocalHandle {
    /// Opens files; directories are only stat'ed.
    pub(crate) fn open(path: PathBuf) -> FsResult<Self> {
        let metadata = std::fs::metadata(&path)?;
        let file = if metadata.is_dir() {
            None
        } else {
            Some(File::open(&path)?)
        };
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn stat(&self) -> FsResult<AssetMetadata> {
        let metadata = match &self.file {
            Some(f) => f.metadata()?,
            None => std::fs::metadata(&self.path)?,
        };
        Ok(to_metadata(&self.path, &metadata))
    }

    /// Children on disk, sorted by name.
    pub fn read_dir(&self, count: isize) -> FsResult<Vec<AssetMetadata>> {
        if self.file.is_some() {
            return Err(FsError::NotADirectory(self.path.display().to_string()));
        }
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.path)? {
            let path = entry?.path();
            let metadata = std::fs::metadata(&path)?;
            entries.push(to_metadata(&path, &metadata));
        }
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        take_listing(entries, count)
    }

    pub fn close(self) -> FsResult<()> {
        drop(self.file);
        Ok(())
    }

    fn file(&mut self) -> io::Result<&mut File> {
        let path = &self.path;
        self.file
            .as_mut()
            .ok_or_else(|| FsError::IsADirectory(path.display().to_string()).into())
    }
}

impl Read for LocalHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file()?.read(buf)
    }
}

impl Seek for LocalHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file()?.seek(pos)
    }
}

fn to_metadata(path: &std::path::Path, metadata: &std::fs::Metadata) -> AssetMetadata {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mod_time = metadata.modified().map(unix_seconds).unwrap_or(0);
    let size = if metadata.is_dir() { 0 } else { metadata.len() };
    AssetMetadata::new(name, size, mod_time, metadata.is_dir())
}
