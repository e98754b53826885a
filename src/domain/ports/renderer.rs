//! Manifest renderer port

use crate::domain::entities::Manifest;
use crate::domain::value_objects::OutputFormat;
use crate::error::EmbedResult;

/// Turns a finalized manifest into output text.
pub trait ManifestRenderer {
    /// Format this renderer produces.
    fn format(&self) -> OutputFormat;

    fn render(&self, manifest: &Manifest) -> EmbedResult<String>;
}
