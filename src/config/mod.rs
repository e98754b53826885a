//! Build configuration
//!
//! Layers, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (EMBEDFS_*)
//! 3. Config file (`--config`, else `./embedfs.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_overrides_from, ConfigWarning, DEFAULT_CONFIG_FILE,
};
pub use types::{BuildConfig, ModTimeSetting, OutputFormat};
