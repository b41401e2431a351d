//! Compiled regex patterns for newsletter cleanup.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by the cleaning pass that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Newsletter Footer Patterns
// =============================================================================

/// Line filters for newsletter navigation and footer boilerplate.
///
/// Each entry is a regex fragment. A line containing a match anywhere is
/// blanked (case-insensitive). Matching is deliberately substring based, so
/// `\d{4}.*LLC` also hits a line where a year and "LLC" are unrelated.
/// The `$`-anchored social network names only match at the end of a line.
pub const NEWSLETTER_FILTER_PATTERNS: &[&str] = &[
    r"unsubscribe",
    r"update.*preferences",
    r"manage.*preferences",
    r"view.*online",
    r"view.*browser",
    r"read.*online",
    r"follow.*on",
    r"facebook$",
    r"twitter$",
    r"linkedin$",
    r"instagram$",
    r"youtube$",
    r"social media",
    r"\d{4}.*LLC",
    r"all rights reserved",
    r"copyright",
    r"©",
];

/// Whole-line matchers built from [`NEWSLETTER_FILTER_PATTERNS`], in order.
pub static NEWSLETTER_LINES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NEWSLETTER_FILTER_PATTERNS
        .iter()
        .map(|pattern| {
            Regex::new(&format!("(?im)^.*{pattern}.*$")).expect("NEWSLETTER_LINES regex")
        })
        .collect()
});

// =============================================================================
// Rendering Artifact Patterns
// =============================================================================

/// Three adjacent table-cell separators with only whitespace between them.
pub static EMPTY_CELLS_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*\|\s*\|").expect("EMPTY_CELLS_TRIPLE regex")
});

/// Two adjacent table-cell separators with only whitespace between them.
pub static EMPTY_CELLS_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*\|").expect("EMPTY_CELLS_PAIR regex"));

/// Empty bracket pairs, left behind by links wrapped around dropped images.
pub static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*\]").expect("EMPTY_BRACKETS regex"));

/// Lines made only of dashes or equals signs.
pub static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*[-=]{3,}\s*$").expect("HORIZONTAL_RULE regex")
});

// =============================================================================
// Whitespace Patterns
// =============================================================================

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Matches two or more consecutive spaces.
pub static MULTIPLE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("MULTIPLE_SPACES regex"));

// =============================================================================
// Transport Encoding Patterns
// =============================================================================

/// Signature of a quoted-printable escaped byte (`=` plus two hex digits).
pub static QP_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=[0-9A-Fa-f]{2}").expect("QP_ESCAPE regex"));

// =============================================================================
// Charset Declaration Patterns
// =============================================================================

/// Match `<meta charset="...">` tag
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("CHARSET_META regex")
});

/// Match a MIME `Content-Type: ...; charset=...` header line
pub static MIME_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?im)^content-type\s*:[^\n]*?;\s*charset\s*=\s*["']?([^"'\s;]+)"#)
        .expect("MIME_CHARSET regex")
});

/// Match a MIME part that opens with a `Content-*` or `MIME-Version` header
pub static MIME_HEADER_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:content-[a-z-]+|mime-version)[ \t]*:")
        .expect("MIME_HEADER_START regex")
});
