//! embedfs - embeddable asset bundles
//!
//! embedfs walks a set of source files and directories, compresses and
//! encodes their contents into a manifest, and renders that manifest as a
//! Rust module. At runtime the [`runtime`] filesystem serves the embedded
//! payloads, or the original files on disk during development.

pub mod application;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod runtime;

// Re-exports for convenience
pub use application::{BuildResult, BuildUseCase, BundlePipeline};
pub use codec::{decode, encode, DecodeError};
pub use config::{BuildConfig, OutputFormat};
pub use domain::entities::{AssetDirectory, AssetFile, Manifest, ManifestEntry};
pub use domain::value_objects::{
    canonicalize, AssetKey, CompressionLevel, Encoding, FunctionNaming, PathFilter,
};
pub use error::{EmbedError, EmbedResult};
pub use infrastructure::render::{parse_manifest, JsonRenderer, RustRenderer};
