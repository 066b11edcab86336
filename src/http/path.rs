//! Request path decoding

use percent_encoding::percent_decode_str;

/// Percent-decode a path or path segment as UTF-8
///
/// Returns `None` when the decoded bytes are not valid UTF-8.
pub fn decode(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}
