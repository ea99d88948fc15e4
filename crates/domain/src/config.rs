use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Destination port for raw DNS queries.
pub const DNS_PORT: u16 = 53;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Resolver section of the dial configuration.
///
/// `dns_server` is the resolver the device-bound path queries directly; it
/// must be a literal IPv4 address, not a hostname.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolverConfig {
    #[serde(default = "default_dns_server")]
    pub dns_server: String,

    /// Read/write deadline for the query exchange, in milliseconds.
    /// 0 disables the deadline.
    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            dns_server: default_dns_server(),
            query_timeout_ms: default_query_timeout(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_dns_server() -> String {
    "8.8.8.8".to_string()
}

fn default_query_timeout() -> u64 {
    5000
}
