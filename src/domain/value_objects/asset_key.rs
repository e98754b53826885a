//! Asset key value object
//!
//! An asset key is the canonical, slash-rooted name of an embedded entry.
//! Keys are derived from source paths by stripping a configured prefix.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Canonical, absolute, slash-separated key of a manifest entry.
///
/// Always begins with `/`. Files and directories share one key space.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(String);

impl AssetKey {
    /// The key of the embedding root.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Derive a key from a source path, stripping `prefix`.
    pub fn from_path(path: &Path, prefix: &str) -> Self {
        canonicalize(&to_slash(path), prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, `/` for the root.
    pub fn base_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) if idx + 1 < self.0.len() => &self.0[idx + 1..],
            _ => "/",
        }
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for AssetKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Turn `path` into an asset key.
///
/// `prefix` (in forward-slash form) is removed from the front of `path` as a
/// plain string prefix, then the remainder is rooted at `/` and lexically
/// cleaned.
pub fn canonicalize(path: &str, prefix: &str) -> AssetKey {
    let path = slashed(path);
    let prefix = slashed(prefix);
    let stripped = path.strip_prefix(prefix.as_str()).unwrap_or(&path);
    AssetKey(clean(stripped))
}

/// Forward-slash form of a host path.
pub fn to_slash(path: &Path) -> String {
    slashed(&path.to_string_lossy())
}

fn slashed(s: &str) -> String {
    if std::path::MAIN_SEPARATOR == '\\' {
        s.replace('\\', "/")
    } else {
        s.to_string()
    }
}

/// Lexically clean `path` as if joined onto `/`.
fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut out = String::with_capacity(path.len() + 1);
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
