// Portfolio API handlers
// Read-only views over the fixture plus the `/api/static/` file mount

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::error::ApiError;
use super::response::ok;
use super::types::HealthStatus;
use crate::fixture::Fixture;
use crate::http::{self, cache};
use crate::resolver::AssetRoot;

pub type ApiResult = Result<Response<Full<Bytes>>, ApiError>;

/// `GET /api/projects`
pub fn list_projects(fixture: &Fixture) -> ApiResult {
    Ok(ok(fixture.projects()))
}

/// `GET /api/projects/{id}`
pub fn get_project(fixture: &Fixture, id: &str) -> ApiResult {
    fixture
        .project(id)
        .map(ok)
        .ok_or_else(|| ApiError::ProjectNotFound(id.to_string()))
}

/// `GET /api/projects/category/{category}`; unknown categories give `[]`
pub fn projects_by_category(fixture: &Fixture, category: &str) -> ApiResult {
    Ok(ok(&fixture.projects_in_category(category)))
}

/// `GET /api/about`
pub fn get_about(fixture: &Fixture) -> ApiResult {
    Ok(ok(fixture.about()))
}

/// `GET /api/health`
pub fn health() -> ApiResult {
    Ok(ok(&HealthStatus::healthy()))
}

/// `GET /api/static/{path}`
pub async fn static_asset(
    root: Option<&AssetRoot>,
    relative: &str,
    if_none_match: Option<&str>,
) -> ApiResult {
    let root = root.ok_or(ApiError::AssetNotFound)?;
    let (content, content_type) = root.load(relative).await.ok_or(ApiError::AssetNotFound)?;
    Ok(http::build_file_response(
        content,
        content_type,
        cache::ASSET_CACHE_CONTROL,
        if_none_match,
    ))
}
