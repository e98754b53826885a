//! Manifest renderers
//!
//! These implement the [`ManifestRenderer`] port from the domain layer.

pub mod json;
pub mod rust;

pub use json::{parse_manifest, JsonRenderer};
pub use rust::RustRenderer;

use crate::config::BuildConfig;
use crate::domain::ports::ManifestRenderer;
use crate::domain::value_objects::OutputFormat;

/// Get the renderer for the configured output format
pub fn renderer_for(config: &BuildConfig) -> Box<dyn ManifestRenderer> {
    match config.format {
        OutputFormat::Rust => Box::new(
            RustRenderer::new(config.module.as_str())
                .with_invocation(config.invocation.as_deref()),
        ),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}
