//! # mail-cleaner
//!
//! Converts raw email HTML and quoted-printable plain text into clean text
//! for reading or summarization.
//!
//! Newsletter templates leave a lot of noise after HTML-to-text conversion:
//! empty layout-table cells, image links with no text, horizontal rules,
//! and footers full of unsubscribe, preference, social and copyright lines.
//! This crate renders the markup, strips that boilerplate, and normalizes
//! whitespace.
//!
//! ## Quick Start
//!
//! ```rust
//! use mail_cleaner::{clean_html, HtmlCleaner};
//!
//! let html = r#"<h1>This week</h1>
//! <p>Three stories worth reading.</p>
//! <p>Follow us on Twitter</p>
//! <p>&copy; 2024 Example Media LLC. All rights reserved.</p>"#;
//!
//! let text = clean_html(html);
//! assert!(text.starts_with("# This week"));
//! assert!(text.ends_with("Three stories worth reading."));
//!
//! // Plain-text parts may still be quoted-printable encoded.
//! let cleaner = HtmlCleaner::new();
//! assert_eq!(cleaner.clean_simple("It=E2=80=99s here"), "It\u{2019}s here");
//! ```
//!
//! ## Features
//!
//! - **Rendering**: HTML to Markdown text via quick_html2md (links, emphasis, lists, tables)
//! - **Boilerplate Removal**: fixed, ordered list of footer line filters
//! - **Transport Decoding**: lenient quoted-printable decoding with fallback
//! - **Charsets**: raw bytes transcoded using `<meta>` or MIME declarations
//!
//! Cleaning never fails: decoding errors fall back to the original text.

mod cleaner;
mod error;
mod options;

/// DOM preparation over `dom_query`.
pub mod dom;

/// Compiled regex patterns and the newsletter filter list.
pub mod patterns;

/// HTML to plain-text rendering.
pub mod render;

/// Post-processing of rendered Markdown.
pub mod markdown;

/// Quoted-printable transport decoding.
pub mod quoted_printable;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use cleaner::{clean_html, normalize_whitespace, remove_newsletter_artifacts, HtmlCleaner};
pub use error::{Error, Result};
pub use options::RenderOptions;
pub use patterns::NEWSLETTER_FILTER_PATTERNS;
