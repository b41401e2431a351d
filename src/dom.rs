//! DOM preparation before Markdown conversion.
//!
//! Email HTML is parsed with `dom_query`, stripped of elements that never
//! carry readable text, and serialized back for the converter.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

use crate::options::RenderOptions;

/// Elements whose content never contributes to the text rendering.
const NON_CONTENT_SELECTOR: &str = "head, title, script, style, noscript, template";

/// Inline formatting elements unwrapped when emphasis is ignored.
///
/// Inline `code` is not listed, so `<pre><code>` blocks stay intact.
const EMPHASIS_TAGS: &[&str] = &["em", "i", "strong", "b", "u", "del", "s", "strike"];

/// Parse HTML string into document
///
/// Fragments are wrapped in `<html><body>` by the parser.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Remove elements that never render as text
#[inline]
pub fn remove_non_content(doc: &Document) {
    doc.select(NON_CONTENT_SELECTOR).remove();
}

/// Unwrap emphasis elements, keeping their text
#[inline]
pub fn strip_emphasis(sel: &Selection) {
    sel.strip_elements(EMPHASIS_TAGS);
}

/// Parse `html` and return the body markup the converter should see.
///
/// Head, script and style content is dropped; emphasis elements are
/// unwrapped when `options.ignore_emphasis` is set.
#[must_use]
pub fn prepare(html: &str, options: &RenderOptions) -> String {
    let doc = parse(html);
    remove_non_content(&doc);

    let body = doc.select("body");
    if !body.exists() {
        return doc.html().to_string();
    }
    if options.ignore_emphasis {
        strip_emphasis(&body);
    }
    body.inner_html().to_string()
}
