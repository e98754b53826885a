//! Domain Entities
//!
//! - `SourceFile` - A file as read during bundling (raw content)
//! - `AssetFile` - An encoded file record in the manifest
//! - `AssetDirectory` - A directory record with its child keys
//! - `Manifest` - The finalized, immutable record set

mod asset_directory;
mod asset_file;
mod manifest;

pub use asset_directory::AssetDirectory;
pub use asset_file::{AssetFile, SourceFile};
pub use manifest::{Manifest, ManifestEntry};
