//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Source trees (disk, in-memory) and the atomic output writer
//! - `render/` - Manifest renderers (Rust source, JSON)

pub mod fs;
pub mod render;

// Re-export for convenience
pub use fs::{write_atomic, LocalSourceTree, MemorySourceTree};
pub use render::{renderer_for, JsonRenderer, RustRenderer};
