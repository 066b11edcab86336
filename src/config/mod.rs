// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::{AppState, BuildRoot};
pub use types::{
    AssetsConfig, Config, ContentConfig, HttpConfig, LoggingConfig, PerformanceConfig,
    ServerConfig,
};

/// Environment variable prefix, e.g. `PORTFOLIO_SERVER__PORT=9000`
const ENV_PREFIX: &str = "PORTFOLIO";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables override it.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("assets.build_dirs"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
