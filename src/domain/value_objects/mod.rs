//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_key;
mod encoding;
mod naming;
mod output_format;
mod path_filter;

pub use asset_key::{canonicalize, to_slash, AssetKey};
pub use encoding::{CompressionLevel, Encoding};
pub use naming::FunctionNaming;
pub use output_format::OutputFormat;
pub use path_filter::PathFilter;
