//! Conditional request support for static files
//!
//! Content-hash `ETag`s and `If-None-Match` evaluation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Max-age for hashed bundle assets and images
pub const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

/// The entry document must be revalidated so a new build is picked up
pub const ENTRY_CACHE_CONTROL: &str = "no-cache";

/// Quoted `ETag` derived from file content, e.g. `"9f1c0a7d"`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Whether the client's `If-None-Match` list contains `etag` (or `*`)
///
/// Weak validators (`W/"..."`) compare equal to their strong form.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header.split(',').map(str::trim).any(|candidate| {
            candidate == "*" || candidate.trim_start_matches("W/") == etag
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_stable() {
        let etag = generate_etag(b"bundle");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag, generate_etag(b"bundle"));
        assert_ne!(etag, generate_etag(b"other bundle"));
    }

    #[test]
    fn test_check_etag_match() {
        let etag = "\"abc123\"";
        assert!(check_etag_match(Some("\"abc123\""), etag));
        assert!(check_etag_match(Some("\"xyz\", \"abc123\""), etag));
        assert!(check_etag_match(Some("W/\"abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("\"different\""), etag));
        assert!(!check_etag_match(None, etag));
    }
}
