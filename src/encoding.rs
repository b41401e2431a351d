//! Character encoding detection and transcoding.
//!
//! Raw message bodies carry their charset either in an HTML `<meta>` tag or
//! in the MIME `Content-Type` header of the part. This module detects it and
//! converts the bytes to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use mailparse::{parse_content_type, parse_headers, MailHeaderMap};

use crate::error::{Error, Result};
use crate::patterns::{CHARSET_META, MIME_CHARSET, MIME_HEADER_START};
use crate::quoted_printable;

/// Detect character encoding from raw message bytes.
///
/// Looks for charset declarations in the following order:
/// 1. `<meta charset="...">` or `<meta http-equiv ... content="...; charset=...">`
/// 2. A MIME `Content-Type: ...; charset=...` header line
/// 3. Defaults to UTF-8 if no declaration found
///
/// Only examines the first 1024 bytes.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = &bytes[..bytes.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    declared_charset(&head_str)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<String> {
    CHARSET_META
        .captures(head)
        .or_else(|| MIME_CHARSET.captures(head))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode raw bytes to a UTF-8 string using the detected encoding.
///
/// Invalid sequences become U+FFFD rather than causing errors.
///
/// # Examples
///
/// ```
/// use mail_cleaner::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    log::trace!("transcoding {} bytes from {}", bytes.len(), encoding.name());
    decode_lossy(bytes, encoding)
}

/// Transcode raw bytes to UTF-8 using an explicit charset label.
///
/// Labels follow the WHATWG Encoding Standard, so `latin1` and
/// `iso-8859-1` both resolve to windows-1252.
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] when the label is not recognised.
pub fn transcode_with_label(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;
    Ok(decode_lossy(bytes, encoding))
}

/// A raw MIME part: its parsed headers and the body that follows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimePart<'a> {
    content_type: Option<String>,
    transfer_encoding: Option<String>,
    /// Body bytes, still in their transfer encoding.
    pub body: &'a [u8],
}

impl<'a> MimePart<'a> {
    /// Split a leading MIME header block off `bytes`.
    ///
    /// Returns `None` unless the first line is a `Content-*` or
    /// `MIME-Version` header and the block parses.
    #[must_use]
    pub fn split(bytes: &'a [u8]) -> Option<Self> {
        let first_line = bytes.split(|&b| b == b'\n').next().unwrap_or_default();
        if !MIME_HEADER_START.is_match(&String::from_utf8_lossy(first_line)) {
            return None;
        }

        let (headers, body_start) = match parse_headers(bytes) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::debug!("treating input as a document, MIME headers did not parse: {err}");
                return None;
            }
        };

        Some(Self {
            content_type: headers.get_first_value("Content-Type"),
            transfer_encoding: headers.get_first_value("Content-Transfer-Encoding"),
            body: bytes.get(body_start..).unwrap_or_default(),
        })
    }

    /// Charset declared in the `Content-Type` header, if recognised.
    #[must_use]
    pub fn charset(&self) -> Option<&'static Encoding> {
        let content_type = parse_content_type(self.content_type.as_deref()?);
        let label = content_type.params.get("charset")?;
        Encoding::for_label(label.trim().as_bytes())
    }

    /// Whether the body is quoted-printable encoded.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.transfer_encoding
            .as_deref()
            .is_some_and(|cte| cte.trim().eq_ignore_ascii_case("quoted-printable"))
    }

    /// Body bytes with the transfer encoding removed.
    #[must_use]
    pub fn decoded_body(&self) -> Vec<u8> {
        if self.is_quoted_printable() {
            quoted_printable::decode_bytes(self.body)
        } else {
            self.body.to_vec()
        }
    }

    /// Body as UTF-8, using the header charset, then any `<meta>` in the
    /// body, then UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        let body = self.decoded_body();
        let encoding = self.charset().unwrap_or_else(|| detect_encoding(&body));
        log::trace!("MIME part body: {} bytes from {}", body.len(), encoding.name());
        decode_lossy(&body, encoding)
    }
}

fn decode_lossy(bytes: &[u8], encoding: &'static Encoding) -> String {
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _encoding_used, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::debug!("malformed {} input replaced with U+FFFD", encoding.name());
    }
    decoded.into_owned()
}
