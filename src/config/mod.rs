// Configuration module entry point
// Loads settings from an optional file, environment overrides and defaults

mod types;

use crate::env::getenv;
use std::net::SocketAddr;

pub use types::{AssetsConfig, Config, LoggingConfig, ServerConfig, TemplatesConfig};

/// Environment variable naming the config file
pub const CONFIG_PATH_VAR: &str = "HELPERS_CONFIG";

impl Config {
    /// Load configuration from the file named by `HELPERS_CONFIG` (default "config")
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&getenv(CONFIG_PATH_VAR, "config"))
    }

    /// Load configuration from specified file path (extension optional)
    ///
    /// Environment variables prefixed with `HELPERS__` override file values,
    /// e.g. `HELPERS__SERVER__PORT=9090`.
    pub fn load_from(config_path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("HELPERS")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?
            .set_default("templates.layout", crate::template::DEFAULT_LAYOUT)?
            .set_default("assets.root", "static")?
            .set_default("assets.prefix", "/static/")?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
