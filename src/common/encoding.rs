//! UTF-8 decoding of raw source payloads.

use std::borrow::Cow;

use super::bom::{BomKind, detect_bom, strip_utf8_bom};

/// Decode a whole payload as UTF-8 text.
///
/// A leading UTF-8 BOM is dropped when `strip_bom` is set. Invalid sequences
/// are replaced with U+FFFD rather than rejected, so decoding never fails.
/// Valid input is borrowed without copying.
pub fn decode_text(bytes: &[u8], strip_bom: bool) -> Cow<'_, str> {
    let payload = if strip_bom { strip_utf8_bom(bytes) } else { bytes };

    match detect_bom(payload) {
        Some(BomKind::Utf8) | None => {},
        Some(kind) => {
            tracing::warn!(?kind, "payload carries a non UTF-8 byte order mark");
        },
    }

    let text = String::from_utf8_lossy(payload);
    if let Cow::Owned(_) = text {
        tracing::warn!(len = payload.len(), "replaced invalid UTF-8 sequences in payload");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text_is_borrowed() {
        let decoded = decode_text(b"a,b\n1,2", true);
        assert!(matches!(decoded, Cow::Borrowed("a,b\n1,2")));
    }

    #[test]
    fn test_bom_stripping_is_configurable() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFa,b", true), "a,b");
        assert_eq!(decode_text(b"\xEF\xBB\xBFa,b", false), "\u{FEFF}a,b");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(decode_text(b"a,\xFF,c", true), "a,\u{FFFD},c");
    }
}
