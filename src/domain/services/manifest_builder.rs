//! Manifest assembly
//!
//! Sorts records and child keys, enforces one key space across files and directories and
//! drops child keys that do not resolve.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::entities::{AssetDirectory, AssetFile, Manifest};
use crate::domain::value_objects::{Encoding, FunctionNaming};
use crate::error::{EmbedError, EmbedResult};

/// Builds a finalized [`Manifest`] from encoded records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestBuilder {
    encoding: Encoding,
    naming: FunctionNaming,
}

impl ManifestBuilder {
    pub fn new(encoding: Encoding, naming: FunctionNaming) -> Self {
        Self { encoding, naming }
    }

    pub fn build(
        &self,
        mut files: Vec<AssetFile>,
        mut directories: Vec<AssetDirectory>,
    ) -> EmbedResult<Manifest> {
        files.sort_by(|a, b| a.key().cmp(b.key()));
        directories.sort_by(|a, b| a.key().cmp(b.key()));

        let known = unique_keys(&files, &directories)?;
        for dir in &mut directories {
            let dir_key = dir.key().clone();
            dir.retain_children(|child| {
                let keep = known.contains(child.as_str());
                if !keep {
                    debug!(directory = %dir_key, child = %child, "dropping unresolved child");
                }
                keep
            });
        }

        Ok(Manifest::assemble(
            self.encoding,
            self.naming,
            files,
            directories,
        ))
    }
}

fn unique_keys(
    files: &[AssetFile],
    directories: &[AssetDirectory],
) -> EmbedResult<HashSet<String>> {
    let mut owners: HashMap<&str, &str> = HashMap::with_capacity(files.len() + directories.len());
    let records = files
        .iter()
        .map(|f| (f.key().as_str(), f.local_path()))
        .chain(directories.iter().map(|d| (d.key().as_str(), d.local_path())));

    for (key, local) in records {
        if owners.insert(key, local).is_some() {
            return Err(EmbedError::DuplicateKey {
                key: key.to_string(),
                path: local.into(),
            });
        }
    }

    Ok(owners.into_keys().map(str::to_string).collect())
}
