//! htmlembed Compactor
//!
//! Squeezes an HTML page onto a single line by removing comments and
//! insignificant whitespace.
//!
//! The passes are regex heuristics, not an HTML parser, and run in a fixed
//! order:
//!
//! 1. HTML comments (`<!-- ... -->`, may span lines)
//! 2. C-style comments (`// ...` through its newline, `/* ... */`)
//! 3. URL marking: `http(s)://...` tokens are wrapped as `<url>`
//! 4. newlines, then tabs, are deleted
//! 5. whitespace runs collapse to a single space
//!
//! Step 2 runs before step 3, so a URL followed later by a newline loses
//! everything from its `//` onwards. Comment-like text inside scripts,
//! strings or attributes is stripped too.

use htmlembed_core::{CompactionStats, Error, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static RE_HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

// A line comment only matches when a newline follows it.
static RE_C_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)//.*?\n|/\*.*?\*/").unwrap());

static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<url>https?://\S+)").unwrap());

/// Remove `<!-- ... -->` comments
pub fn strip_html_comments(text: &str) -> String {
    RE_HTML_COMMENT.replace_all(text, "").into_owned()
}

/// Remove `// ...\n` and `/* ... */` comments
pub fn strip_c_comments(text: &str) -> String {
    RE_C_COMMENT.replace_all(text, "").into_owned()
}

/// Wrap every `http://` / `https://` token in angle brackets
pub fn mark_urls(text: &str) -> String {
    RE_URL.replace_all(text, "<${url}>").into_owned()
}

/// Delete line breaks and tabs, then collapse whitespace runs to one space
pub fn collapse_whitespace(text: &str) -> String {
    let text = text.replace('\n', "").replace('\t', "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Translate `\r\n` and lone `\r` line breaks to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Run every pass over `text`
pub fn compact_str(text: &str) -> String {
    let result = strip_html_comments(text);
    let result = strip_c_comments(&result);
    let result = mark_urls(&result);
    collapse_whitespace(&result)
}

/// Read `path` as UTF-8, normalize line endings and compact it
pub fn compact_file(path: &Path) -> Result<String> {
    compact_file_with_stats(path).map(|(compacted, _)| compacted)
}

/// Like [`compact_file`], also reporting input and output sizes
pub fn compact_file_with_stats(path: &Path) -> Result<(String, CompactionStats)> {
    debug!("Compacting {:?}", path);
    let html = std::fs::read_to_string(path).map_err(|e| Error::file_access(path, e))?;

    // `\r\n` and `\r` count as `\n`, so CRLF checkouts compact the same
    let compacted = compact_str(&normalize_line_endings(&html));
    let stats = CompactionStats::new(html.len(), compacted.len());
    debug!(
        "Compacted {:?}: {} -> {} bytes",
        path, stats.original_len, stats.compacted_len
    );

    Ok((compacted, stats))
}
