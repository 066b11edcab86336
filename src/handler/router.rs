//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. One ordered decision per request:
//! method check, then `/api/` prefix, then the static/SPA fallback.

use crate::api::{self, ApiError};
use crate::config::AppState;
use crate::handler::spa;
use crate::http::{self, cors, path, CorsRequest};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{
    ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, IF_NONE_MATCH, ORIGIN,
    REFERER, USER_AGENT,
};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Owned request facts needed by the handlers
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    /// Path as received, still percent-encoded
    pub raw_path: String,
    /// Percent-decoded path used for routing; `None` when not valid UTF-8
    pub path: Option<String>,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub cors: CorsRequest,
}

impl RequestContext {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            method: req.method().clone(),
            raw_path: req.uri().path().to_string(),
            path: path::decode(req.uri().path()),
            is_head: req.method() == Method::HEAD,
            if_none_match: header_string(req, IF_NONE_MATCH),
            cors: CorsRequest {
                origin: header_string(req, ORIGIN),
                request_method: header_string(req, ACCESS_CONTROL_REQUEST_METHOD),
                request_headers: header_string(req, ACCESS_CONTROL_REQUEST_HEADERS),
            },
        }
    }

    /// Plain GET for `path`
    #[cfg(test)]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::GET,
            raw_path: path.to_string(),
            path: path::decode(path),
            is_head: false,
            if_none_match: None,
            cors: CorsRequest::default(),
        }
    }

    /// Path the routing decision is made on
    ///
    /// Undecodable paths are routed on their raw form.
    pub fn routing_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.raw_path)
    }
}

fn header_string<B>(req: &Request<B>, name: hyper::header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let ctx = RequestContext::from_request(&req);
    let access_entry = state
        .config
        .logging
        .access_log
        .then(|| access_log_entry(&req, peer_addr));
    drop(req);

    let response = respond(&ctx, &state).await;

    if let Some(mut entry) = access_entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route the request and apply the headers every response carries
pub async fn respond(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    let mut response = route_request(ctx, state).await;

    http::apply_server_header(&mut response, &state.config.http.server_name);
    if state.config.http.enable_cors {
        cors::apply_cors_headers(&mut response, &ctx.cors);
    }

    if ctx.is_head {
        http::strip_body(response)
    } else {
        response
    }
}

/// Ordered decision list: method, API namespace, static/SPA fallback
async fn route_request(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    match ctx.method {
        Method::GET | Method::HEAD => {}
        Method::OPTIONS => {
            let mut response = http::build_options_response();
            if state.config.http.enable_cors {
                cors::apply_preflight_headers(&mut response, &ctx.cors);
            }
            return response;
        }
        _ => {
            logger::log_warning(&format!(
                "Method not allowed: {} {}",
                ctx.method, ctx.raw_path
            ));
            return ApiError::MethodNotAllowed.into_response();
        }
    }

    if api::claims(ctx.routing_path()) {
        return api::handle_api(ctx, state).await;
    }

    spa::serve(ctx, state).await
}

fn access_log_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.referer = header_string(req, REFERER);
    entry.user_agent = header_string(req, USER_AGENT);
    entry
}
