//! Extension to MIME type lookup.
//!
//! The table is compiled into the binary from `mime_types.csv` and parsed
//! once, on first use. Lookups are exact-match: `"CSS"` and `"css"` are
//! different keys.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Returned for any extension the table does not know.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const MIME_DATA: &str = include_str!("mime_types.csv");

static MIME_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| parse_table(MIME_DATA));

/// Parses `extension,mime_type` rows, skipping the header row.
///
/// Blank lines and rows without a comma are ignored.
fn parse_table(data: &'static str) -> HashMap<&'static str, &'static str> {
    data.lines()
        .skip(1)
        .filter_map(|line| line.trim_end_matches('\r').split_once(','))
        .map(|(ext, mime)| (ext.trim(), mime.trim()))
        .filter(|(ext, mime)| !ext.is_empty() && !mime.is_empty())
        .collect()
}

/// Returns the MIME type for `extension`.
///
/// A single leading `.` is stripped, so `".css"` and `"css"` resolve the same.
///
/// # Example
///
/// ```
/// # use jella::http::mime::content_type;
/// assert_eq!(content_type(".css"), "text/css");
/// assert_eq!(content_type("nope"), "application/octet-stream");
/// ```
pub fn content_type(extension: &str) -> &'static str {
    let ext = extension.strip_prefix('.').unwrap_or(extension);

    MIME_TABLE.get(ext).copied().unwrap_or(DEFAULT_MIME_TYPE)
}
