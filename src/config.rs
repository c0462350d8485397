//! Configuration management for the RAX account server
//!
//! All values are read once at startup. Sources, lowest precedence first:
//! built-in defaults, an optional `config.toml`, `RAX_ACCOUNT_*` environment
//! variables, and finally `MONGO_URI` for the store connection string.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORE_URI: &str = "memory://";
const DEFAULT_MAX_BODY_SIZE_KB: usize = 4096;

/// Environment variable carrying the document store connection string.
pub const STORE_URI_ENV: &str = "MONGO_URI";

/// Server configuration (restart required for every value)
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Listening port
    /// Environment: RAX_ACCOUNT_PORT
    pub port: u16,

    /// Document store connection string (`memory://` or `file://<dir>`)
    /// Environment: MONGO_URI
    pub store_uri: String,

    /// Largest accepted request body in KiB; image payloads arrive inline
    pub max_body_size_kb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            store_uri: DEFAULT_STORE_URI.to_string(),
            max_body_size_kb: DEFAULT_MAX_BODY_SIZE_KB,
        }
    }
}

impl ServerConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let store_uri_override = std::env::var(STORE_URI_ENV).ok();
        Self::load_from("config", store_uri_override)
    }

    /// Load configuration from the file at `config_path` (extension optional)
    pub fn load_from(
        config_path: &str,
        store_uri_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("store_uri", DEFAULT_STORE_URI)?
            .set_default("max_body_size_kb", DEFAULT_MAX_BODY_SIZE_KB as i64)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("RAX_ACCOUNT").try_parsing(true))
            .set_override_option("store_uri", store_uri_override)?
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Message("bind_address cannot be empty".into()));
        }

        if self.store_uri.trim().is_empty() {
            return Err(ConfigError::Message("store_uri cannot be empty".into()));
        }

        if self.max_body_size_kb == 0 {
            return Err(ConfigError::Message(
                "max_body_size_kb must be greater than 0".into(),
            ));
        }

        if self.max_body_size_kb.checked_mul(1024).is_none() {
            return Err(ConfigError::Message(
                "max_body_size_kb is too large to express in bytes".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as a socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get the body size limit in bytes
    pub fn max_body_size_bytes(&self) -> usize {
        self.max_body_size_kb.saturating_mul(1024)
    }
}
