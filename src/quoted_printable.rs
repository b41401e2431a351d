//! Quoted-printable transport decoding.
//!
//! Plain-text newsletters frequently arrive with the quoted-printable body
//! encoding still applied. Decoding is lenient: malformed escapes are kept
//! literally and soft line breaks (`=` at end of line) are joined.
//!
//! The text-level entry point encodes the input as Latin-1 (one byte per
//! char) before decoding and reads the result back as UTF-8, silently
//! dropping invalid sequences. A char outside Latin-1 is the one failure.

use crate::error::{Error, Result};
use crate::patterns::QP_ESCAPE;

/// Literal substitutions for artifacts that survive a single decode pass,
/// usually from double-encoded bodies. Applied in order.
const RESIDUAL_ARTIFACTS: &[(&str, &str)] = &[
    ("=3D", ""),
    ("=2C", ","),
    ("=E2=80=99", "'"),
    ("=E2=80=9C", "\""),
    ("=E2=80=9D", "\""),
    ("=0A", "\n"),
];

/// Returns true if `text` contains at least one `=XX` hex escape.
#[must_use]
pub fn has_escapes(text: &str) -> bool {
    QP_ESCAPE.is_match(text)
}

/// Decode quoted-printable bytes.
///
/// - `=XX` (hex, either case) becomes the byte `0xXX`
/// - `=` followed by a line break is a soft break and is removed together
///   with the break
/// - `==` collapses to a single `=`
/// - any other `=` is kept as is; a trailing `=` at end of input is dropped
///
/// This never fails.
///
/// # Examples
///
/// ```
/// use mail_cleaner::quoted_printable::decode_bytes;
///
/// assert_eq!(decode_bytes(b"a=3Db"), b"a=b");
/// assert_eq!(decode_bytes(b"soft=\nbreak"), b"softbreak");
/// assert_eq!(decode_bytes(b"x=zz"), b"x=zz");
/// ```
#[must_use]
pub fn decode_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let byte = input[i];
        if byte != b'=' {
            out.push(byte);
            i += 1;
            continue;
        }

        i += 1;
        let Some(&next) = input.get(i) else {
            break;
        };

        match next {
            b'\n' => i += 1,
            b'\r' => {
                // Skip to and past the line feed.
                while i < input.len() && input[i] != b'\n' {
                    i += 1;
                }
                if i < input.len() {
                    i += 1;
                }
            }
            b'=' => {
                out.push(b'=');
                i += 1;
            }
            _ => match (hex_value(next), input.get(i + 1).copied().and_then(hex_value)) {
                (Some(high), Some(low)) => {
                    out.push((high << 4) | low);
                    i += 2;
                }
                _ => out.push(b'='),
            },
        }
    }

    out
}

/// Decode a quoted-printable string into readable text.
///
/// The text is mapped to Latin-1 bytes, decoded, and read back as UTF-8 with
/// invalid sequences dropped. Residual escape artifacts are then replaced.
///
/// # Errors
///
/// Returns [`Error::UnencodableChar`] if the text contains a char above
/// U+00FF.
///
/// # Examples
///
/// ```
/// use mail_cleaner::quoted_printable::decode;
///
/// assert_eq!(decode("Caf=C3=A9")?, "Café");
/// assert!(decode("snow ☃ =C3=A9").is_err());
/// # Ok::<(), mail_cleaner::Error>(())
/// ```
pub fn decode(text: &str) -> Result<String> {
    let raw = to_latin1(text)?;
    let decoded = decode_bytes(&raw);
    let mut text = utf8_dropping_invalid(&decoded);

    for (artifact, replacement) in RESIDUAL_ARTIFACTS {
        if text.contains(artifact) {
            text = text.replace(artifact, replacement);
        }
    }

    Ok(text)
}

/// Decode only when the text carries quoted-printable escapes.
///
/// Text without escapes is returned unchanged, and so is text that fails to
/// decode.
#[must_use]
pub fn decode_if_present(text: &str) -> String {
    if !has_escapes(text) {
        return text.to_string();
    }

    match decode(text) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::debug!("quoted-printable decode failed, keeping original text: {err}");
            text.to_string()
        }
    }
}

fn to_latin1(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| Error::UnencodableChar { ch, position })
        })
        .collect()
}

fn utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
