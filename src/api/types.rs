// API body types
// Shapes of the non-fixture JSON payloads

use serde::Serialize;

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthStatus {
    pub const fn healthy() -> Self {
        Self {
            status: "healthy",
            message: "API 運行正常",
        }
    }
}

/// Informational payload served in place of the SPA when it is not built
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}
