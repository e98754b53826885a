//! Atomic output writer
//!
//! Uses the tempfile + rename pattern so a failed run never leaves a
//! partially written output behind.

use std::io::Write;
use std::path::Path;

use crate::error::{EmbedError, EmbedResult};

/// Write `content` to `path` atomically, creating parent directories.
pub fn write_atomic(path: &Path, content: &[u8]) -> EmbedResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| EmbedError::io(dir, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| EmbedError::io(dir, e))?;
    tmp.write_all(content)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| EmbedError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| EmbedError::io(path, e.error))?;
    Ok(())
}
