//! Character encoding detection and transcoding.
//!
//! Reference pages are fetched as raw bytes and are not guaranteed UTF-8.
//! The charset is sniffed from meta tags in the document head and the bytes
//! decoded to UTF-8 before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Detect the character encoding declared in the first 1024 bytes.
///
/// Falls back to UTF-8 when no usable declaration is found, the standard web
/// default.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for re in [&CHARSET_META_RE, &CONTENT_TYPE_CHARSET_RE] {
        let label = re.captures(&head_str).and_then(|c| c.get(1));
        if let Some(encoding) = label.and_then(|m| Encoding::for_label(m.as_str().as_bytes())) {
            return encoding;
        }
    }

    UTF_8
}

/// Transcode page bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing; a garbled
/// character is recoverable by the caller, a refused page is not.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detect_legacy_charset_from_meta() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per the WHATWG registry
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_content_type() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn default_to_utf8_when_no_declaration() {
        let html = b"<html><body>Test</body></html>";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn transcode_utf8_passthrough() {
        let html = b"<html><body>Hello</body></html>";
        assert_eq!(transcode_to_utf8(html), "<html><body>Hello</body></html>");
    }

    #[test]
    fn transcode_legacy_bytes() {
        // ISO-8859-1 encoded page with 0xE9 (e-acute)
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn invalid_bytes_become_replacement_chars() {
        let html = b"<html><body>Test \xFF\xFE End</body></html>";
        let result = transcode_to_utf8(html);
        assert!(result.contains("Test"));
        assert!(result.contains("End"));
    }
}
