//! Bundling pipeline
//!
//! ## Flow
//!
//! 1. Resolve the modification time override and compile the filters
//! 2. Walk the roots through a [`SourceTree`]
//! 3. Encode every file payload
//! 4. Assemble the manifest

use tracing::{debug, info};

use crate::codec;
use crate::config::BuildConfig;
use crate::domain::entities::{AssetFile, Manifest};
use crate::domain::ports::SourceTree;
use crate::domain::services::{ManifestBuilder, PathWalker};
use crate::domain::value_objects::PathFilter;
use crate::error::{EmbedError, EmbedResult};
use crate::infrastructure::fs::LocalSourceTree;

/// Walk + encode + assemble, driven by a [`BuildConfig`].
#[derive(Debug, Clone)]
pub struct BundlePipeline {
    config: BuildConfig,
}

impl BundlePipeline {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Bundle from the real filesystem.
    pub fn bundle(&self) -> EmbedResult<Manifest> {
        self.bundle_from(LocalSourceTree::new())
    }

    /// Bundle from any source tree.
    pub fn bundle_from<T: SourceTree>(&self, tree: T) -> EmbedResult<Manifest> {
        let config = &self.config;
        if config.files.is_empty() {
            return Err(EmbedError::NoRoots);
        }

        let mod_time = config.mod_time_override()?;
        let filter = PathFilter::new(config.ignore.as_deref(), config.include.as_deref())?;
        let level = config.compression_level();

        let walked = PathWalker::new(tree, &filter, &config.prefix)
            .with_mod_time(mod_time)
            .walk(&config.files)?;

        let files = walked
            .files
            .into_iter()
            .map(|file| {
                let payload = codec::encode(file.content(), level)?;
                debug!(key = %file.key(), size = file.content().len(), "encoded");
                Ok(file.into_asset(payload))
            })
            .collect::<EmbedResult<Vec<AssetFile>>>()?;

        let manifest = ManifestBuilder::new(level.encoding(), config.naming())
            .build(files, walked.directories)?;
        info!(
            entries = manifest.len(),
            encoding = %manifest.encoding(),
            "manifest built"
        );
        Ok(manifest)
    }
}
