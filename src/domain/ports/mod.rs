//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod renderer;
pub mod source_tree;

pub use renderer::ManifestRenderer;
pub use source_tree::{SourceStat, SourceTree};
