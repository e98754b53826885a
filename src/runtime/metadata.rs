//! Entry metadata returned by `stat` and `read_dir`

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Name, size, modification time and kind of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMetadata {
    name: String,
    size: u64,
    mod_time: i64,
    is_dir: bool,
}

impl AssetMetadata {
    pub fn new(name: impl Into<String>, size: u64, mod_time: i64, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            size,
            mod_time,
            is_dir,
        }
    }

    /// Base name of the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the raw content in bytes, `0` for directories.
    pub fn len(&self) -> u64 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Unix seconds.
    pub fn mod_time(&self) -> i64 {
        self.mod_time
    }

    pub fn modified(&self) -> SystemTime {
        if self.mod_time >= 0 {
            UNIX_EPOCH + Duration::from_secs(self.mod_time as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs(self.mod_time.unsigned_abs())
        }
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_file(&self) -> bool {
        !self.is_dir
    }
}
