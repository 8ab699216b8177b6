//! Configuration loading and representation.
//!
//! Everything comes from environment variables; see [`AppConfig::from_env`].

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use fulfilment_observability::{LogFormat, ObservabilityConfig, UnknownLogFormat};

use crate::location::{LocationTableError, StaticLocationDirectory};

pub const BIND_ADDR_VAR: &str = "FULFILMENT_BIND_ADDR";
pub const LOCATIONS_FILE_VAR: &str = "FULFILMENT_LOCATIONS_FILE";
pub const LOG_FORMAT_VAR: &str = "FULFILMENT_LOG_FORMAT";
pub const LOG_LEVEL_VAR: &str = "FULFILMENT_LOG_LEVEL";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {BIND_ADDR_VAR} '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid {LOG_FORMAT_VAR}: {0}")]
    InvalidLogFormat(#[from] UnknownLogFormat),

    #[error("invalid {LOCATIONS_FILE_VAR}: {0}")]
    Locations(#[from] LocationTableError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Replaces the built-in location table when set.
    pub locations_file: Option<PathBuf>,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, map in tests).
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };
        let default_level = get(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            bind_addr,
            locations_file: get(LOCATIONS_FILE_VAR).map(PathBuf::from),
            observability: ObservabilityConfig { format, default_level },
        })
    }

    /// The configured location table, or the built-in one.
    pub fn location_directory(&self) -> Result<StaticLocationDirectory, ConfigError> {
        match &self.locations_file {
            Some(path) => Ok(StaticLocationDirectory::from_json_file(path)?),
            None => Ok(StaticLocationDirectory::builtin()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            locations_file: None,
            observability: ObservabilityConfig::default(),
        }
    }
}
