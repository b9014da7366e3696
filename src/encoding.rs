//! Character encoding detection and transcoding for byte input.
//!
//! The upstream pages are served in whatever charset the hosting declares,
//! so byte input is sniffed for a `<meta>` charset declaration and converted
//! to UTF-8 before parsing. Invalid sequences are replaced with U+FFFD
//! rather than reported.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches both `<meta charset="...">` and the legacy
/// `<meta http-equiv="Content-Type" content="...; charset=...">` form.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("META_CHARSET regex")
});

/// Detect the character encoding declared in the first kilobyte of `html`.
///
/// Falls back to UTF-8 when no declaration is found or the declared label is
/// unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head_str)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string, honoring a declared charset.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
