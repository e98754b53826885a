//! Domain Services
//!
//! Bundling logic that operates on domain entities. I/O only happens
//! through the [`SourceTree`](crate::domain::ports::SourceTree) port.

mod manifest_builder;
mod walker;

pub use manifest_builder::ManifestBuilder;
pub use walker::{PathWalker, WalkOutput};
