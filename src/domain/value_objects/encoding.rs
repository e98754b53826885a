//! Payload encoding value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a manifest's payloads were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// gzip stream, base64 encoded
    #[default]
    Gzip,
    /// Raw bytes, base64 encoded
    Identity,
}

impl Encoding {
    pub fn is_compressed(self) -> bool {
        self == Encoding::Gzip
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Gzip => f.write_str("gzip"),
            Encoding::Identity => f.write_str("identity"),
        }
    }
}

/// gzip level, `0` meaning no compression at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    pub const NONE: CompressionLevel = CompressionLevel(0);
    pub const BEST: CompressionLevel = CompressionLevel(9);

    /// Clamp `level` into `0..=9`.
    pub fn new(level: u32) -> Self {
        Self(level.min(9))
    }

    pub fn level(self) -> u32 {
        self.0
    }

    /// Encoding that payloads produced at this level carry.
    pub fn encoding(self) -> Encoding {
        if self.0 == 0 {
            Encoding::Identity
        } else {
            Encoding::Gzip
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::BEST
    }
}
