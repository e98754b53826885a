//! JSON manifest renderer

use crate::domain::entities::Manifest;
use crate::domain::ports::ManifestRenderer;
use crate::domain::value_objects::OutputFormat;
use crate::error::{EmbedError, EmbedResult};

/// Renders a manifest as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, manifest: &Manifest) -> EmbedResult<String> {
        let mut json =
            serde_json::to_string_pretty(manifest).map_err(|e| EmbedError::Render(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}

/// Parse a manifest previously rendered by [`JsonRenderer`].
///
/// The records go through the same checks as a fresh build.
pub fn parse_manifest(json: &str) -> EmbedResult<Manifest> {
    serde_json::from_str(json).map_err(|e| EmbedError::Render(format!("invalid manifest JSON: {e}")))
}
