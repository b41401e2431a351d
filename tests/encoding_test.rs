use mail_cleaner::{Error, HtmlCleaner};

/// UTF-8 bytes are handled without a declaration
#[test]
fn utf8_bytes_are_cleaned() {
    let html = "<p>Special characters: é, ñ, ü, 中文</p>".as_bytes();
    let text = HtmlCleaner::new().clean_bytes(html);
    assert_eq!(text, "Special characters: é, ñ, ü, 中文");
}

/// ISO-8859-1 declared in a meta tag is converted to UTF-8
#[test]
fn iso88591_meta_is_honoured() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
        <body><p>Caf\xE9 espa\xF1ol</p><p>M\xFCnchen</p></body></html>";

    let text = HtmlCleaner::new().clean_bytes(html);
    assert_eq!(text, "Café español\n\nMünchen");
}

/// Windows-1252 smart quotes survive transcoding
#[test]
fn windows1252_http_equiv_is_honoured() {
    let html = b"<html><head>\
        <meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">\
        </head><body><p>\x93Smart quotes\x94 and an en\x96dash.</p></body></html>";

    let text = HtmlCleaner::new().clean_bytes(html);
    assert_eq!(text, "\u{201C}Smart quotes\u{201D} and an en\u{2013}dash.");
}

/// A MIME part header declares the charset
#[test]
fn mime_header_charset_is_honoured() {
    let part = b"Content-Type: text/html; charset=iso-8859-1\r\n\r\n<p>M\xFCnchen</p>";
    let text = HtmlCleaner::new().clean_bytes(part);
    assert_eq!(text, "München");
}

/// A quoted-printable MIME part is decoded and its headers dropped
#[test]
fn quoted_printable_mime_part_is_decoded() {
    let part = b"MIME-Version: 1.0\r\n\
        Content-Type: text/html; charset=utf-8\r\n\
        Content-Transfer-Encoding: quoted-printable\r\n\r\n\
        <p class=3D\"lead\">Caf=C3=A9 opens at=\r\n nine</p>";
    let text = HtmlCleaner::new().clean_bytes(part);
    assert_eq!(text, "Café opens at nine");
}

#[test]
fn explicit_charset_overrides_mime_header() {
    let part = b"Content-Type: text/html; charset=utf-8\n\n<p>Gr\xFC\xDFe</p>";
    let text = HtmlCleaner::new().clean_bytes_with_charset(part, "latin1");
    assert_eq!(text.as_deref(), Ok("Grüße"));
}

/// Invalid UTF-8 does not panic
#[test]
fn invalid_bytes_are_handled_gracefully() {
    let html = b"<p>Test \xFF\xFE Invalid</p>";
    let text = HtmlCleaner::new().clean_bytes(html);
    assert!(text.contains("Test"));
    assert!(text.contains("Invalid"));
}

#[test]
fn explicit_charset_is_used() {
    let text = HtmlCleaner::new().clean_bytes_with_charset(b"<p>Gr\xFC\xDFe</p>", "latin1");
    assert_eq!(text.as_deref(), Ok("Grüße"));
}

#[test]
fn unknown_explicit_charset_is_an_error() {
    let result = HtmlCleaner::new().clean_bytes_with_charset(b"<p>x</p>", "x-unknown");
    match result {
        Err(Error::UnknownEncoding(label)) => assert_eq!(label, "x-unknown"),
        other => panic!("expected UnknownEncoding, got {other:?}"),
    }
}

#[test]
fn boilerplate_is_removed_after_transcoding() {
    let html = b"<meta charset=\"windows-1252\"><p>Story</p><p>\xA9 2024 Example</p>";
    assert_eq!(HtmlCleaner::new().clean_bytes(html), "Story");
}
