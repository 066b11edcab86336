//! HTTP response building module
//!
//! Builders for the non-JSON responses: served files, the entry document,
//! conditional 304s and the preflight reply.

use super::cache;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, SERVER};
use hyper::{Response, StatusCode};

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str, cache_control: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("ETag", etag)
        .header("Cache-Control", cache_control)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response for file content with `ETag` revalidation
///
/// Returns 304 when `if_none_match` already names the content's `ETag`.
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    cache_control: &str,
    if_none_match: Option<&str>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(&data);
    if cache::check_etag_match(if_none_match, &etag) {
        return build_304_response(&etag, cache_control);
    }

    let content_length = data.len();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .header("Cache-Control", cache_control)
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 204 preflight response; CORS headers are added by the caller
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Strip the body of a response for HEAD, keeping its headers
pub fn strip_body(response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Full::new(Bytes::new()))
}

/// Stamp the configured `Server` header
pub fn apply_server_header(response: &mut Response<Full<Bytes>>, server_name: &str) {
    if let Ok(value) = HeaderValue::from_str(server_name) {
        response.headers_mut().insert(SERVER, value);
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_file_response_headers() {
        let resp = build_file_response(
            b"body{}".to_vec(),
            "text/css; charset=utf-8",
            cache::ASSET_CACHE_CONTROL,
            None,
        );
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "6");
        assert!(resp.headers().contains_key("ETag"));
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body{}");
    }

    #[tokio::test]
    async fn test_file_response_not_modified() {
        let etag = cache::generate_etag(b"body{}");
        let resp = build_file_response(
            b"body{}".to_vec(),
            "text/css",
            cache::ASSET_CACHE_CONTROL,
            Some(&etag),
        );
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_strip_body_keeps_length() {
        let resp = strip_body(build_file_response(
            b"abc".to_vec(),
            "text/plain",
            cache::ENTRY_CACHE_CONTROL,
            None,
        ));
        assert_eq!(resp.headers()["Content-Length"], "3");
        assert_eq!(resp.headers()["Cache-Control"], "no-cache");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn test_server_header() {
        let mut resp = build_options_response();
        apply_server_header(&mut resp, "portfolio-server");
        assert_eq!(resp.headers()["Server"], "portfolio-server");
    }
}
