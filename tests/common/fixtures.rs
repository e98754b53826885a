//! Reusable test content.

/// A small HTML page
pub const INDEX_HTML: &str = "<!doctype html>\n<title>embedfs</title>\n<h1>hello</h1>\n";

/// A stylesheet
pub const SITE_CSS: &str = "body { margin: 0; }\n";

/// Finder metadata that should never be embedded
pub const DS_STORE: &str = "\0\0\0\x01Bud1";

/// Pattern that skips Finder metadata
pub const IGNORE_DS_STORE: &str = r"\.DS_Store";
