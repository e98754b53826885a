//! In-memory source tree
//!
//! A synthetic directory-listing provider, mainly for tests. Counts reads
//! and listings per path so callers can assert what was touched.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{SourceStat, SourceTree};

#[derive(Debug, Clone)]
enum Node {
    File {
        content: Vec<u8>,
        mod_time: i64,
        readable: bool,
    },
    Dir,
}

/// Source tree held in memory.
///
/// Uses `Arc<Mutex<>>` for the counters so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceTree {
    nodes: BTreeMap<PathBuf, Node>,
    reads: Arc<Mutex<HashMap<PathBuf, usize>>>,
    lists: Arc<Mutex<HashMap<PathBuf, usize>>>,
}

impl MemorySourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &[u8], mod_time: i64) -> Self {
        self.insert_file(path.as_ref(), content.to_vec(), mod_time, true);
        self
    }

    /// Add a file whose reads fail with `PermissionDenied`.
    pub fn with_unreadable_file(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_file(path.as_ref(), Vec::new(), 0, false);
        self
    }

    /// Add an (empty) directory and its parents.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = normalize(path.as_ref());
        self.insert_parents(&path);
        self.nodes.insert(path, Node::Dir);
        self
    }

    /// How many times `path` was read.
    pub fn reads_of(&self, path: impl AsRef<Path>) -> usize {
        count(&self.reads, path.as_ref())
    }

    /// How many times `path` was listed.
    pub fn lists_of(&self, path: impl AsRef<Path>) -> usize {
        count(&self.lists, path.as_ref())
    }

    fn insert_file(&mut self, path: &Path, content: Vec<u8>, mod_time: i64, readable: bool) {
        let path = normalize(path);
        self.insert_parents(&path);
        self.nodes.insert(
            path,
            Node::File {
                content,
                mod_time,
                readable,
            },
        );
    }

    fn insert_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn node(&self, path: &Path) -> io::Result<(PathBuf, &Node)> {
        let path = normalize(path);
        match self.nodes.get(&path) {
            Some(node) => Ok((path, node)),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such file or directory", path.display()),
            )),
        }
    }
}

impl SourceTree for MemorySourceTree {
    fn stat(&self, path: &Path) -> io::Result<SourceStat> {
        match self.node(path)?.1 {
            Node::File { mod_time, .. } => Ok(SourceStat::file(*mod_time)),
            Node::Dir => Ok(SourceStat::dir(0)),
        }
    }

    fn list(&self, path: &Path) -> io::Result<Vec<String>> {
        let (path, node) = self.node(path)?;
        if !matches!(node, Node::Dir) {
            return Err(io::Error::other(format!(
                "{}: not a directory",
                path.display()
            )));
        }
        bump(&self.lists, &path);

        Ok(self
            .nodes
            .keys()
            .filter(|p| p.parent() == Some(path.as_path()))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let (path, node) = self.node(path)?;
        bump(&self.reads, &path);
        match node {
            Node::File {
                content,
                readable: true,
                ..
            } => Ok(content.clone()),
            Node::File { .. } => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{}: permission denied", path.display()),
            )),
            Node::Dir => Err(io::Error::other(format!(
                "{}: is a directory",
                path.display()
            ))),
        }
    }
}

/// Drops `.` segments and repeated separators.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

fn bump(counter: &Mutex<HashMap<PathBuf, usize>>, path: &Path) {
    if let Ok(mut map) = counter.lock() {
        *map.entry(path.to_path_buf()).or_default() += 1;
    }
}

fn count(counter: &Mutex<HashMap<PathBuf, usize>>, path: &Path) -> usize {
    counter
        .lock()
        .map(|map| map.get(&normalize(path)).copied().unwrap_or(0))
        .unwrap_or(0)
}
