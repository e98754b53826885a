//! SourceTree port - what the walker reads source roots through
//!
//! Keeping this behind a trait lets the walker run against a synthetic
//! tree in tests instead of the real filesystem.

use std::io;
use std::path::Path;

/// Kind and modification time of a source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceStat {
    pub is_dir: bool,
    /// Unix seconds
    pub mod_time: i64,
}

impl SourceStat {
    pub fn file(mod_time: i64) -> Self {
        Self {
            is_dir: false,
            mod_time,
        }
    }

    pub fn dir(mod_time: i64) -> Self {
        Self {
            is_dir: true,
            mod_time,
        }
    }
}

/// Abstract directory-listing provider
///
/// Implementations:
/// - `LocalSourceTree` - the real filesystem
/// - `MemorySourceTree` - in-memory tree for tests
pub trait SourceTree {
    /// Kind and modification time of `path`.
    fn stat(&self, path: &Path) -> io::Result<SourceStat>;

    /// Names of the immediate children of the directory at `path`.
    fn list(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Full content of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<T: SourceTree + ?Sized> SourceTree for &T {
    fn stat(&self, path: &Path) -> io::Result<SourceStat> {
        (**self).stat(path)
    }

    fn list(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}
