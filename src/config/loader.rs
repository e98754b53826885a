//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EmbedError, EmbedResult};

use super::types::{BuildConfig, ModTimeSetting};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "embedfs.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        write!(f, ": unknown config key '{}'", self.key)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EmbedResult<(BuildConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| EmbedError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: BuildConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmbedError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `explicit` if given, else `embedfs.toml` in `cwd` if present, else
/// defaults.
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> EmbedResult<(BuildConfig, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let project_config = cwd.join(DEFAULT_CONFIG_FILE);
    if project_config.is_file() {
        return load_with_warnings(&project_config);
    }

    Ok((BuildConfig::default(), Vec::new()))
}

/// Apply environment variable overrides (EMBEDFS_* prefix)
pub fn with_env_overrides(config: BuildConfig) -> BuildConfig {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`with_env_overrides`] with an explicit variable lookup.
pub fn with_overrides_from(
    mut config: BuildConfig,
    var: impl Fn(&str) -> Option<String>,
) -> BuildConfig {
    // EMBEDFS_PREFIX
    if let Some(prefix) = var("EMBEDFS_PREFIX") {
        config.prefix = prefix;
    }

    // EMBEDFS_MODTIME
    if let Some(modtime) = var("EMBEDFS_MODTIME") {
        config.modtime = Some(ModTimeSetting::Text(modtime));
    }

    // EMBEDFS_NO_COMPRESSION (empty means unset)
    if let Some(val) = var("EMBEDFS_NO_COMPRESSION").filter(|v| !v.is_empty()) {
        config.no_compression = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "files",
        "prefix",
        "ignore",
        "include",
        "modtime",
        "no_compression",
        "level",
        "private",
        "module",
        "output",
        "format",
        "invocation",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
