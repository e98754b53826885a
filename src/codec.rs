//! Payload codec
//!
//! Raw bytes are (optionally) gzip compressed, base64 encoded and split into
//! fixed-width lines so the payload can sit in a source file as a literal:
//!
//! ```text
//! \n
//! H4sIAAAAAAAC/...80 chars...\n
//! ...\n
//! ```

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;

use crate::domain::value_objects::{CompressionLevel, Encoding};
use crate::error::{EmbedError, EmbedResult};

/// Width of each payload line.
pub const LINE_WIDTH: usize = 80;

/// Failure to turn a payload back into bytes.
///
/// Cloneable so a cached failure can be handed to every reader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(String),

    #[error("failed to decompress payload: {0}")]
    Decompress(String),
}

/// Encode `raw` at `level`. Level `0` is identity (base64 only).
pub fn encode(raw: &[u8], level: CompressionLevel) -> EmbedResult<String> {
    let encoded = match level.encoding() {
        Encoding::Identity => STANDARD.encode(raw),
        Encoding::Gzip => STANDARD.encode(gzip(raw, level)?),
    };
    Ok(chunk_lines(&encoded))
}

/// Inverse of [`encode`].
pub fn decode(payload: &str, encoding: Encoding) -> Result<Vec<u8>, DecodeError> {
    let joined: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD
        .decode(joined.as_bytes())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    if encoding.is_compressed() {
        gunzip(&bytes)
    } else {
        Ok(bytes)
    }
}

fn gzip(raw: &[u8], level: CompressionLevel) -> EmbedResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level.level()));
    encoder.write_all(raw).map_err(EmbedError::Compression)?;
    encoder.finish().map_err(EmbedError::Compression)
}

fn gunzip(compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::Decompress(e.to_string()))?;
    Ok(out)
}

/// Leading newline, then `LINE_WIDTH`-character lines each ending in `\n`.
fn chunk_lines(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len() + encoded.len() / LINE_WIDTH + 2);
    out.push('\n');
    // base64 output is ASCII, so byte chunks are char boundaries.
    for line in encoded.as_bytes().chunks(LINE_WIDTH) {
        out.push_str(std::str::from_utf8(line).unwrap_or_default());
        out.push('\n');
    }
    out
}
