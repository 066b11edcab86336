//! Portfolio REST API
//!
//! Everything under `/api/`. Unknown paths in this namespace answer with a
//! structured 404 and never reach the SPA fallback.

mod error;
mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::logger;

pub use error::ApiError;
pub use response::json_response;
pub use types::{ErrorBody, HealthStatus, MessageBody};

/// Namespace claimed by the API
pub const API_PREFIX: &str = "/api/";

/// Whether `raw_path` belongs to the API namespace
pub fn claims(raw_path: &str) -> bool {
    raw_path.starts_with(API_PREFIX)
}

/// API route handler
///
/// `ctx.routing_path()` must start with [`API_PREFIX`].
pub async fn handle_api(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    let result = match ctx.path.as_deref() {
        Some(decoded) => {
            let rest = decoded.strip_prefix(API_PREFIX).unwrap_or_default();
            route(rest, ctx, state).await
        }
        None => Err(ApiError::EndpointNotFound),
    };

    result.unwrap_or_else(|e| {
        logger::log_debug(&format!("API {} -> {e:?}", ctx.raw_path));
        e.into_response()
    })
}

/// `rest` is the decoded path after `/api/`
async fn route(rest: &str, ctx: &RequestContext, state: &AppState) -> handlers::ApiResult {
    if let Some(asset) = rest.strip_prefix("static/") {
        return handlers::static_asset(
            state.api_static.as_ref(),
            asset,
            ctx.if_none_match.as_deref(),
        )
        .await;
    }

    let segments: Vec<&str> = rest.split('/').collect();
    let fixture = &state.fixture;

    match segments.as_slice() {
        ["projects"] | ["projects", ""] => handlers::list_projects(fixture),
        ["projects", "category", category] if !category.is_empty() => {
            handlers::projects_by_category(fixture, category)
        }
        ["projects", id] => handlers::get_project(fixture, id),
        ["about"] => handlers::get_about(fixture),
        ["health"] => handlers::health(),
        _ => Err(ApiError::EndpointNotFound),
    }
}
