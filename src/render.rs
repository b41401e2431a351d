//! HTML to plain-text rendering.
//!
//! Uses quick_html2md for the HTML→Markdown conversion: inline
//! `[text](url)` links, emphasis markers, list bullets and GFM tables.
//! [`RenderOptions`] is mapped onto the converter's options; the settings it
//! has no equivalent for are applied before (emphasis) or after (ASCII
//! fallback, wrapping) the conversion.

use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

use crate::dom;
use crate::markdown;
use crate::options::RenderOptions;

/// Render an HTML document or fragment to plain text.
///
/// # Example
///
/// ```rust
/// use mail_cleaner::{render::html_to_text, RenderOptions};
///
/// let html = r#"<p>Read the <a href="https://example.com/post">full story</a></p>"#;
/// let text = html_to_text(html, &RenderOptions::default());
/// assert_eq!(text.trim(), "Read the [full story](https://example.com/post)");
/// ```
#[must_use]
pub fn html_to_text(html: &str, options: &RenderOptions) -> String {
    let body = dom::prepare(html, options);
    if body.trim().is_empty() {
        return String::new();
    }

    // Map RenderOptions to quick_html2md MarkdownOptions
    let md_options = MarkdownOptions::new()
        .include_links(!options.ignore_links)
        .include_images(!options.ignore_images)
        .preserve_tables(true);

    let mut text = html_to_markdown_with_options(&body, &md_options);

    if !options.unicode_snob {
        text = markdown::ascii_fallback(&text);
    }
    if options.wraps() {
        text = markdown::wrap(&text, options.body_width);
    }

    log::trace!("rendered {} bytes of HTML to {} bytes of text", html.len(), text.len());
    text
}
