//! Cross-origin headers
//!
//! Every origin is allowed, with credentials. Because credentialed requests
//! cannot use `*`, the request's own `Origin` is echoed back.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, VARY,
};
use hyper::Response;

const ALL_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
const PREFLIGHT_MAX_AGE: &str = "600";

/// CORS-relevant request headers
#[derive(Debug, Clone, Default)]
pub struct CorsRequest {
    pub origin: Option<String>,
    pub request_method: Option<String>,
    pub request_headers: Option<String>,
}

/// Add the simple-request CORS headers when the request carried an `Origin`
pub fn apply_cors_headers(response: &mut Response<Full<Bytes>>, cors: &CorsRequest) {
    let Some(origin) = cors
        .origin
        .as_deref()
        .and_then(|o| HeaderValue::from_str(o).ok())
    else {
        return;
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.append(VARY, HeaderValue::from_static("Origin"));
}

/// Add preflight headers, echoing the requested method and headers
///
/// Origin and credential headers come from [`apply_cors_headers`].
pub fn apply_preflight_headers(response: &mut Response<Full<Bytes>>, cors: &CorsRequest) {
    if cors.origin.is_none() {
        return;
    }

    let methods = cors
        .request_method
        .as_deref()
        .and_then(|m| HeaderValue::from_str(m).ok())
        .unwrap_or_else(|| HeaderValue::from_static(ALL_METHODS));
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, methods);
    if let Some(requested) = cors
        .request_headers
        .as_deref()
        .and_then(|h| HeaderValue::from_str(h).ok())
    {
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested);
    }
    headers.insert(
        ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
}
