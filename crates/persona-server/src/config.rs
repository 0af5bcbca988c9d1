//! Server configuration read from environment variables.
//!
//! - `PERSONA_HOST`: bind address (default: "0.0.0.0")
//! - `PERSONA_PORT`: listen port (default: "3000")
//! - `PERSONA_ENV`: "development" exposes fault detail in 500 responses
//!   (default: production)

use thiserror::Error;

pub const HOST_VAR: &str = "PERSONA_HOST";
pub const PORT_VAR: &str = "PERSONA_PORT";
pub const ENV_VAR: &str = "PERSONA_ENV";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

/// Deployment mode. Only controls how much fault detail clients see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    Development,
    #[default]
    Production,
}

impl RunMode {
    /// `"development"` (any case) selects development mode; anything else is
    /// production.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("development") {
            RunMode::Development
        } else {
            RunMode::Production
        }
    }

    pub fn exposes_fault_detail(self) -> bool {
        self == RunMode::Development
    }
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub mode: RunMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mode: RunMode::default(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value: raw,
                })?,
            None => DEFAULT_PORT,
        };

        let mode = lookup(ENV_VAR)
            .map(|raw| RunMode::parse(&raw))
            .unwrap_or_default();

        Ok(ServerConfig { host, port, mode })
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
