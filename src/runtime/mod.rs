//! Virtual filesystem runtime
//!
//! Serves a bundled manifest either from the embedded payloads or, for
//! development, straight from the source files on disk.
//!
//! ```no_run
//! use std::sync::Arc;
//! use embedfs::runtime::{open_file_system, Catalog};
//! # fn manifest() -> embedfs::Manifest { unimplemented!() }
//!
//! let catalog = Arc::new(Catalog::new(&manifest()));
//! let fs = open_file_system(false, &catalog);
//! let index = fs.read_to_string("/index.html")?;
//! # Ok::<(), embedfs::runtime::FsError>(())
//! ```

mod backend;
mod catalog;
mod error;
mod handle;
mod metadata;

use std::sync::Arc;

pub use backend::{AssetFs, DirectoryView, EmbeddedFs, LocalFs};
pub use catalog::{Catalog, CatalogEntry, StaticEntry, StaticManifest};
pub use error::{FsError, FsResult};
pub use handle::{AssetHandle, EmbeddedHandle, LocalHandle};
pub use metadata::AssetMetadata;

/// Filesystem over the catalog; `use_local` serves the source files instead.
pub fn open_file_system(use_local: bool, catalog: &Arc<Catalog>) -> AssetFs {
    if use_local {
        AssetFs::Local(LocalFs::new(catalog.clone()))
    } else {
        AssetFs::Embedded(EmbeddedFs::new(catalog.clone()))
    }
}

/// Like [`open_file_system`], scoped to the directory `name`.
pub fn open_directory(use_local: bool, catalog: &Arc<Catalog>, name: &str) -> AssetFs {
    open_file_system(use_local, catalog).scoped(name)
}

/// Content of `name`.
pub fn read_bytes(use_local: bool, catalog: &Arc<Catalog>, name: &str) -> FsResult<Arc<[u8]>> {
    open_file_system(use_local, catalog).read(name)
}

/// Content of `name` as text.
pub fn read_string(use_local: bool, catalog: &Arc<Catalog>, name: &str) -> FsResult<String> {
    open_file_system(use_local, catalog).read_to_string(name)
}

/// Same as [`read_bytes`].
///
/// # Panics
///
/// Panics if `name` cannot be read.
pub fn must_read_bytes(use_local: bool, catalog: &Arc<Catalog>, name: &str) -> Arc<[u8]> {
    match read_bytes(use_local, catalog, name) {
        Ok(bytes) => bytes,
        Err(e) => panic!("{e}"),
    }
}

/// Same as [`read_string`].
///
/// # Panics
///
/// Panics if `name` cannot be read or is not UTF-8.
pub fn must_read_string(use_local: bool, catalog: &Arc<Catalog>, name: &str) -> String {
    match read_string(use_local, catalog, name) {
        Ok(s) => s,
        Err(e) => panic!("{e}"),
    }
}
