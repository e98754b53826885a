//! Breadth-first source walker
//!
//! Turns a list of roots into raw file records and directory records,
//! applying the ignore/include filters on the way.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::{AssetDirectory, SourceFile};
use crate::domain::ports::SourceTree;
use crate::domain::value_objects::{canonicalize, to_slash, AssetKey, PathFilter};
use crate::error::{EmbedError, EmbedResult};

/// Raw records produced by a walk, in visit order.
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub files: Vec<SourceFile>,
    pub directories: Vec<AssetDirectory>,
}

/// Walks source roots through a [`SourceTree`].
pub struct PathWalker<'a, T: SourceTree> {
    tree: T,
    filter: &'a PathFilter,
    prefix: &'a str,
    mod_time: Option<i64>,
}

impl<'a, T: SourceTree> PathWalker<'a, T> {
    pub fn new(tree: T, filter: &'a PathFilter, prefix: &'a str) -> Self {
        Self {
            tree,
            filter,
            prefix,
            mod_time: None,
        }
    }

    /// Force every file's modification time to `mod_time`.
    pub fn with_mod_time(mut self, mod_time: Option<i64>) -> Self {
        self.mod_time = mod_time;
        self
    }

    /// Walk every root, one after the other.
    ///
    /// Aborts on the first IO failure or duplicate file key.
    pub fn walk(&self, roots: &[PathBuf]) -> EmbedResult<WalkOutput> {
        let mut output = WalkOutput::default();
        let mut seen: HashSet<AssetKey> = HashSet::new();

        for root in roots {
            let mut queue: VecDeque<PathBuf> = VecDeque::from([root.clone()]);
            while let Some(path) = queue.pop_front() {
                self.visit(&path, &mut queue, &mut seen, &mut output)?;
            }
        }

        info!(
            files = output.files.len(),
            directories = output.directories.len(),
            "walk finished"
        );
        Ok(output)
    }

    fn visit(
        &self,
        path: &Path,
        queue: &mut VecDeque<PathBuf>,
        seen: &mut HashSet<AssetKey>,
        output: &mut WalkOutput,
    ) -> EmbedResult<()> {
        let local = to_slash(path);
        if self.filter.is_ignored(&local) {
            debug!(path = %local, "ignored");
            return Ok(());
        }

        let stat = self
            .tree
            .stat(path)
            .map_err(|e| EmbedError::io(path, e))?;
        let key = canonicalize(&local, self.prefix);

        if stat.is_dir {
            let mut names = self
                .tree
                .list(path)
                .map_err(|e| EmbedError::io(path, e))?;
            names.sort();

            let mut children = Vec::with_capacity(names.len());
            for name in names {
                let child = path.join(&name);
                let child_local = to_slash(&child);
                if self.filter.is_listed(&child_local) {
                    children.push(canonicalize(&child_local, self.prefix));
                }
                // Ignored children are dropped when dequeued.
                queue.push_back(child);
            }

            debug!(key = %key, children = children.len(), "directory");
            output
                .directories
                .push(AssetDirectory::new(key, local, children));
        } else if self.filter.is_included(&local) {
            let content = self
                .tree
                .read(path)
                .map_err(|e| EmbedError::io(path, e))?;
            if !seen.insert(key.clone()) {
                return Err(EmbedError::DuplicateKey {
                    key: key.into_string(),
                    path: path.to_path_buf(),
                });
            }

            debug!(key = %key, size = content.len(), "file");
            let mod_time = self.mod_time.unwrap_or(stat.mod_time);
            output
                .files
                .push(SourceFile::new(key, local, content, mod_time));
        } else {
            debug!(path = %local, "not included");
        }

        Ok(())
    }
}
