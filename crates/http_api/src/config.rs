//! Application configuration

use serde::{Deserialize, Serialize};
use telemetry::TelemetryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Environment overrides use `_` as the nesting separator, so only
    /// single-word leaves are addressable that way (e.g.
    /// `INVENTORY_SERVER_PORT`, `INVENTORY_TELEMETRY_ENDPOINT`,
    /// `INVENTORY_TELEMETRY_ENABLED`). Leaves whose names themselves
    /// contain underscores (`service_name`, `sampling_ratio`,
    /// `export_timeout_secs`, `log_filter`) can only be set via the
    /// config file.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., INVENTORY_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("INVENTORY")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
