//! Build use case
//!
//! Bundles the configured roots, renders the manifest and writes the result
//! atomically. Nothing is written unless every step succeeded.

use std::path::PathBuf;

use tracing::info;

use crate::config::BuildConfig;
use crate::domain::ports::SourceTree;
use crate::error::EmbedResult;
use crate::infrastructure::fs::{write_atomic, LocalSourceTree};
use crate::infrastructure::render::renderer_for;

use super::bundle::BundlePipeline;

/// Outcome of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub files: usize,
    pub directories: usize,
    /// Rendered output
    pub rendered: String,
    /// Where it was written; `None` means the caller prints it.
    pub written_to: Option<PathBuf>,
}

/// Bundle + render + write.
#[derive(Debug, Clone)]
pub struct BuildUseCase {
    pipeline: BundlePipeline,
}

impl BuildUseCase {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            pipeline: BundlePipeline::new(config),
        }
    }

    pub fn execute(&self) -> EmbedResult<BuildResult> {
        self.execute_with(LocalSourceTree::new())
    }

    pub fn execute_with<T: SourceTree>(&self, tree: T) -> EmbedResult<BuildResult> {
        let config = self.pipeline.config();
        let manifest = self.pipeline.bundle_from(tree)?;
        let rendered = renderer_for(config).render(&manifest)?;

        if let Some(path) = &config.output {
            write_atomic(path, rendered.as_bytes())?;
            info!(path = %path.display(), format = %config.format, "wrote output");
        }

        Ok(BuildResult {
            files: manifest.files().len(),
            directories: manifest.directories().len(),
            rendered,
            written_to: config.output.clone(),
        })
    }
}
