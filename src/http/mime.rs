//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::path::Path;

/// Content-Type for a file path, judged by its extension
pub fn content_type_for(path: &Path) -> &'static str {
    get_content_type(path.extension().and_then(|e| e.to_str()))
}

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use portfolio_server::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(get_content_type(Some("webmanifest")), "application/manifest+json");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    let Some(ext) = extension else {
        return "application/octet-stream";
    };

    match ext.to_ascii_lowercase().as_str() {
        // Documents produced by the frontend build
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "json" | "map" => "application/json",
        "webmanifest" => "application/manifest+json",
        "txt" => "text/plain; charset=utf-8",
        "xml" => "application/xml",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "avif" => "image/avif",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",

        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_types() {
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(Some("css")), "text/css; charset=utf-8");
        assert_eq!(
            get_content_type(Some("js")),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(get_content_type(Some("map")), "application/json");
        assert_eq!(get_content_type(Some("PNG")), "image/png");
    }

    #[test]
    fn test_path_lookup() {
        assert_eq!(
            content_type_for(Path::new("build/static/media/logo.svg")),
            "image/svg+xml"
        );
        assert_eq!(content_type_for(Path::new("build/favicon.ico")), "image/x-icon");
        assert_eq!(content_type_for(Path::new("LICENSE")), "application/octet-stream");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }
}
