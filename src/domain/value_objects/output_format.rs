//! Output format of a bundling run

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a renderer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A Rust module embedding the payloads
    #[default]
    Rust,
    /// The manifest as JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Rust => "rust",
            OutputFormat::Json => "json",
        })
    }
}
