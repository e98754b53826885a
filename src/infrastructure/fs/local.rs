//! Local File System Implementation
//!
//! Implements the SourceTree port for the real disk.

use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::{SourceStat, SourceTree};

/// Reads source roots from the local filesystem.
///
/// Symlinks are followed, the same way opening the path would.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSourceTree;

impl LocalSourceTree {
    pub fn new() -> Self {
        Self
    }
}

impl SourceTree for LocalSourceTree {
    fn stat(&self, path: &Path) -> io::Result<SourceStat> {
        let metadata = std::fs::metadata(path)?;
        Ok(SourceStat {
            is_dir: metadata.is_dir(),
            mod_time: unix_seconds(metadata.modified()?),
        })
    }

    fn list(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Seconds since the Unix epoch, negative for earlier times.
pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}
