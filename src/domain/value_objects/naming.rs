//! Generated API naming mode

use serde::{Deserialize, Serialize};

/// Visibility of the functions a renderer generates.
///
/// The core never interprets this; it is carried on the manifest so the
/// renderer can read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FunctionNaming {
    /// Exported accessors (`pub fn`)
    #[default]
    Public,
    /// Crate-private accessors (`pub(crate) fn`)
    Private,
}

impl FunctionNaming {
    pub fn from_private(private: bool) -> Self {
        if private {
            FunctionNaming::Private
        } else {
            FunctionNaming::Public
        }
    }

    /// Rust visibility keyword for generated items.
    pub fn visibility(self) -> &'static str {
        match self {
            FunctionNaming::Public => "pub",
            FunctionNaming::Private => "pub(crate)",
        }
    }
}
