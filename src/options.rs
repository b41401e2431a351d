//! Configuration options for HTML-to-text rendering.
//!
//! `RenderOptions` controls how markup is rendered before any cleaning
//! happens. Link and image settings map onto the Markdown converter's
//! options; the rest are applied around the conversion. The cleaner itself
//! always renders with [`RenderOptions::default`].

/// Configuration options for HTML-to-text rendering.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the settings the cleaner uses.
///
/// # Example
///
/// ```rust
/// use mail_cleaner::RenderOptions;
///
/// // Use defaults
/// let options = RenderOptions::default();
///
/// // Customize specific fields
/// let options = RenderOptions {
///     ignore_links: true,
///     body_width: 72,
///     ..RenderOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderOptions {
    /// Render anchors as plain text, dropping their URLs.
    ///
    /// Default: `false`
    pub ignore_links: bool,

    /// Drop `<img>` elements entirely.
    ///
    /// When `false`, images are kept as Markdown image references.
    ///
    /// Default: `true`
    pub ignore_images: bool,

    /// Omit emphasis markers by unwrapping `em`, `strong`, `b`, `i` and
    /// strike-through elements before conversion. Inline code is kept.
    ///
    /// Default: `false`
    pub ignore_emphasis: bool,

    /// Wrap prose lines at this many characters. `0` disables wrapping.
    ///
    /// Default: `0`
    pub body_width: usize,

    /// Keep non-ASCII characters as they are.
    ///
    /// When `false`, common typographic characters (smart quotes, dashes,
    /// ellipses, non-breaking spaces) are replaced with ASCII equivalents.
    ///
    /// Default: `true`
    pub unicode_snob: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ignore_links: false,
            ignore_images: true,
            ignore_emphasis: false,
            body_width: 0,
            unicode_snob: true,
        }
    }
}

impl RenderOptions {
    /// Whether line wrapping is enabled.
    #[must_use]
    pub const fn wraps(&self) -> bool {
        self.body_width > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_links_and_drop_images() {
        let options = RenderOptions::default();
        assert!(!options.ignore_links);
        assert!(options.ignore_images);
        assert!(!options.ignore_emphasis);
        assert!(options.unicode_snob);
        assert!(!options.wraps());
    }

    #[test]
    fn nonzero_width_enables_wrapping() {
        let options = RenderOptions {
            body_width: 40,
            ..RenderOptions::default()
        };
        assert!(options.wraps());
    }
}
