//! Newsletter cleanup.
//!
//! `HtmlCleaner` renders email HTML to text and strips the boilerplate that
//! newsletter templates leave behind: empty table cells, link brackets
//! around dropped images, horizontal rules, and footer lines (unsubscribe,
//! preferences, social links, copyright).

use crate::encoding::{self, MimePart};
use crate::error::Result;
use crate::options::RenderOptions;
use crate::patterns::{
    EMPTY_BRACKETS, EMPTY_CELLS_PAIR, EMPTY_CELLS_TRIPLE, HORIZONTAL_RULE, MULTIPLE_NEWLINES,
    MULTIPLE_SPACES, NEWSLETTER_LINES,
};
use crate::quoted_printable;
use crate::render;

/// Converts email HTML and plain text into cleaned plain text.
///
/// The cleaner holds only its fixed rendering settings, so one instance can
/// be shared across threads.
///
/// # Example
///
/// ```rust
/// use mail_cleaner::HtmlCleaner;
///
/// let cleaner = HtmlCleaner::new();
/// let html = "<p>Weekly digest</p><p><a href=\"https://x.test/u\">Unsubscribe</a></p>";
/// assert_eq!(cleaner.clean(html), "Weekly digest");
/// ```
#[derive(Debug, Clone)]
pub struct HtmlCleaner {
    render_options: RenderOptions,
}

impl Default for HtmlCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlCleaner {
    /// Create a cleaner: links kept, images dropped, emphasis kept, no
    /// wrapping, Unicode passed through.
    #[must_use]
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Convert HTML to clean plain text.
    ///
    /// Empty input yields empty output.
    #[must_use]
    pub fn clean(&self, html_content: &str) -> String {
        if html_content.is_empty() {
            return String::new();
        }

        let text = render::html_to_text(html_content, &self.render_options);
        let text = remove_newsletter_artifacts(&text);
        let text = normalize_whitespace(&text);
        text.trim().to_string()
    }

    /// Clean plain text that may carry quoted-printable transport encoding.
    ///
    /// Decoding only happens when an `=XX` escape is present and falls back
    /// to the original text if it fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mail_cleaner::HtmlCleaner;
    ///
    /// let cleaner = HtmlCleaner::new();
    /// assert_eq!(cleaner.clean_simple("Caf=C3=A9   open=\nnow"), "Café opennow");
    /// ```
    #[must_use]
    pub fn clean_simple(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = quoted_printable::decode_if_present(text);
        let text = normalize_whitespace(&text);
        text.trim().to_string()
    }

    /// Clean raw HTML bytes, detecting the charset from `<meta>` tags or a
    /// MIME `Content-Type` header and defaulting to UTF-8.
    ///
    /// Input that starts with a MIME header block is treated as a single
    /// MIME part: the headers are dropped and a quoted-printable body is
    /// decoded before transcoding.
    #[must_use]
    pub fn clean_bytes(&self, html: &[u8]) -> String {
        let html = match MimePart::split(html) {
            Some(part) => part.body_text(),
            None => encoding::transcode_to_utf8(html),
        };
        self.clean(&html)
    }

    /// Clean raw HTML bytes in an explicitly named charset.
    ///
    /// A leading MIME header block is dropped as in [`Self::clean_bytes`],
    /// but `charset` overrides any charset it declares.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEncoding`] if `charset` is not a
    /// recognised label.
    pub fn clean_bytes_with_charset(&self, html: &[u8], charset: &str) -> Result<String> {
        let html = match MimePart::split(html) {
            Some(part) => encoding::transcode_with_label(&part.decoded_body(), charset)?,
            None => encoding::transcode_with_label(html, charset)?,
        };
        Ok(self.clean(&html))
    }
}

/// Remove table artifacts, empty brackets, rules and footer lines.
///
/// Footer lines are blanked rather than deleted, so their newlines remain
/// for [`normalize_whitespace`] to collapse.
#[must_use]
pub fn remove_newsletter_artifacts(text: &str) -> String {
    let text = EMPTY_CELLS_TRIPLE.replace_all(text, "");
    let text = EMPTY_CELLS_PAIR.replace_all(&text, "");
    let text = EMPTY_BRACKETS.replace_all(&text, "");
    let mut text = HORIZONTAL_RULE.replace_all(&text, "").into_owned();

    for pattern in NEWSLETTER_LINES.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, "").into_owned();
        }
    }

    text
}

/// Collapse 3+ newlines to a blank line and 2+ spaces to one.
///
/// Idempotent.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let text = MULTIPLE_NEWLINES.replace_all(text, "\n\n");
    MULTIPLE_SPACES.replace_all(&text, " ").into_owned()
}

/// Convenience wrapper for [`HtmlCleaner::clean`] with a fresh cleaner.
#[must_use]
pub fn clean_html(html_content: &str) -> String {
    HtmlCleaner::new().clean(html_content)
}
