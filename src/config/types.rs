//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CompressionLevel, FunctionNaming};
use crate::error::{EmbedError, EmbedResult};

use super::loader::{self, ConfigWarning};

// Re-export OutputFormat from domain layer
pub use crate::domain::value_objects::OutputFormat;

/// Modification time override as written by the user.
///
/// Config files may spell it as a TOML integer or a string; flags and
/// environment variables always give a string. Parsing happens when the
/// build starts so a bad value fails the build, not the config load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModTimeSetting {
    Seconds(i64),
    Text(String),
}

impl ModTimeSetting {
    /// Unix seconds, or `None` for an empty string.
    pub fn resolve(&self) -> EmbedResult<Option<i64>> {
        match self {
            ModTimeSetting::Seconds(secs) => Ok(Some(*secs)),
            ModTimeSetting::Text(text) if text.is_empty() => Ok(None),
            ModTimeSetting::Text(text) => {
                text.parse::<i64>()
                    .map(Some)
                    .map_err(|source| EmbedError::InvalidModTime {
                        value: text.clone(),
                        source,
                    })
            }
        }
    }
}

/// Everything a bundling run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Roots to embed, walked in order
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Removed from the front of every path before it becomes a key
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub ignore: Option<String>,

    #[serde(default)]
    pub include: Option<String>,

    #[serde(default)]
    pub modtime: Option<ModTimeSetting>,

    #[serde(default)]
    pub no_compression: bool,

    /// gzip level, `9` when unset
    #[serde(default)]
    pub level: Option<u32>,

    #[serde(default)]
    pub private: bool,

    #[serde(default = "default_module")]
    pub module: String,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Command line recorded in the generated header
    #[serde(default)]
    pub invocation: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            prefix: String::new(),
            ignore: None,
            include: None,
            modtime: None,
            no_compression: false,
            level: None,
            private: false,
            module: default_module(),
            output: None,
            format: OutputFormat::default(),
            invocation: None,
        }
    }
}

fn default_module() -> String {
    "assets".to_string()
}

impl BuildConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EmbedResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EmbedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (EMBEDFS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Parsed modification time override.
    pub fn mod_time_override(&self) -> EmbedResult<Option<i64>> {
        match &self.modtime {
            Some(setting) => setting.resolve(),
            None => Ok(None),
        }
    }

    /// Effective compression level; `no_compression` wins over `level`.
    pub fn compression_level(&self) -> CompressionLevel {
        if self.no_compression {
            CompressionLevel::NONE
        } else {
            self.level
                .map(CompressionLevel::new)
                .unwrap_or_default()
        }
    }

    pub fn naming(&self) -> FunctionNaming {
        FunctionNaming::from_private(self.private)
    }
}
