//! Path filter value object
//!
//! Compiled ignore/include expressions applied while walking source roots.

use regex::Regex;

use crate::error::{EmbedError, EmbedResult};

/// Ignore and include patterns for the walker.
///
/// Both are unanchored regular expressions matched against the slash form of a
/// source path. An empty pattern string means "not configured".
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    ignore: Option<Regex>,
    include: Option<Regex>,
}

impl PathFilter {
    /// A filter that ignores nothing and includes everything.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(ignore: Option<&str>, include: Option<&str>) -> EmbedResult<Self> {
        Ok(Self {
            ignore: compile(ignore)?,
            include: compile(include)?,
        })
    }

    /// Path and its descendants are dropped entirely.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignore.as_ref().is_some_and(|re| re.is_match(path))
    }

    /// Path passes the include restriction (always true when none is set).
    pub fn is_included(&self, path: &str) -> bool {
        self.include.as_ref().is_none_or(|re| re.is_match(path))
    }

    /// Whether a directory child shows up in its parent's listing.
    pub fn is_listed(&self, path: &str) -> bool {
        !self.is_ignored(path) && self.is_included(path)
    }
}

fn compile(pattern: Option<&str>) -> EmbedResult<Option<Regex>> {
    match pattern {
        None | Some("") => Ok(None),
        Some(p) => Regex::new(p)
            .map(Some)
            .map_err(|source| EmbedError::InvalidPattern {
                pattern: p.to_string(),
                source,
            }),
    }
}
