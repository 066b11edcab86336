// API error module
// Every variant renders itself as a JSON `{"detail": ...}` response

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ALLOW};
use hyper::{Response, StatusCode};
use thiserror::Error;

use super::response::json_response;
use super::types::ErrorBody;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No project carries the requested id
    #[error("專案不存在")]
    ProjectNotFound(String),

    /// Path under `/api/` that names no endpoint
    #[error("API 端點不存在")]
    EndpointNotFound,

    /// Static file missing, unreadable, or outside its root
    #[error("Not Found")]
    AssetNotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Handler did not finish within `performance.request_timeout`
    #[error("Service Unavailable")]
    Timeout,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::ProjectNotFound(_) | Self::EndpointNotFound | Self::AssetNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Timeout => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        let mut response = json_response(
            self.status(),
            &ErrorBody {
                detail: self.to_string(),
            },
        );
        if self == Self::MethodNotAllowed {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET, HEAD, OPTIONS"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_not_found_detail_body() {
        let resp = ApiError::ProjectNotFound("nope".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({"detail": "專案不存在"}));
    }

    #[test]
    fn test_method_not_allowed_sets_allow() {
        let resp = ApiError::MethodNotAllowed.into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_timeout_is_service_unavailable() {
        let resp = ApiError::Timeout.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!resp.headers().contains_key("Allow"));
    }
}
