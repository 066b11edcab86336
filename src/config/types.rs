// Configuration types module
// Every section has serde defaults so a missing config file still yields a working server

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub assets: AssetsConfig,
    pub content: ContentConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; CPU count when unset
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json)
    pub access_log_format: String,
    /// Access log file path (stdout if not set)
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            access_log: true,
            access_log_format: "combined".to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Connection handling limits
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Reuse connections for further requests
    pub keep_alive: bool,
    /// Seconds allowed for a request's headers to arrive
    pub header_read_timeout: u64,
    /// Seconds allowed to produce a response
    pub request_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive: true,
            header_read_timeout: 30,
            request_timeout: 30,
            max_connections: None,
        }
    }
}

/// HTTP behaviour
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub server_name: String,
    /// Allow every origin (credentialed) when true
    pub enable_cors: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            server_name: "portfolio-server".to_string(),
            enable_cors: true,
        }
    }
}

/// Where the SPA build and API images live
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AssetsConfig {
    /// Candidate build directories, first existing wins
    pub build_dirs: Vec<String>,
    /// Directory served under `/api/static/`
    pub static_dir: String,
    /// SPA shell file inside the build directory
    pub entry_document: String,
    /// Bundle subdirectory of the build served under `/static/`
    pub spa_static_prefix: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            build_dirs: vec![
                "web/build".to_string(),
                "../web/build".to_string(),
                "./build".to_string(),
            ],
            static_dir: "static".to_string(),
            entry_document: "index.html".to_string(),
            spa_static_prefix: "static".to_string(),
        }
    }
}

/// Portfolio content source
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// TOML file replacing the built-in content
    pub fixture_path: Option<String>,
}
