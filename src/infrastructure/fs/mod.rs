//! File System Implementations
//!
//! Concrete implementations of the SourceTree port, plus the output writer.

mod local;
mod memory;
mod output;

pub use local::{unix_seconds, LocalSourceTree};
pub use memory::MemorySourceTree;
pub use output::write_atomic;
