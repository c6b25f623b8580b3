//! Server configuration parsed from environment variables.

use landing::config::{BackendConfig, DEFAULT_BACKEND_URL};

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading configuration at boot.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but not a valid port number.
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    /// `BACKEND_URL` is set but not an `http(s)://` address.
    #[error("invalid BACKEND_URL {0:?}: expected an http:// or https:// address")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub backend: BackendConfig,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `BACKEND_URL`: analysis backend base address, default
    ///   `http://localhost:8000`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        Ok(Self { port, backend })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort { value: raw.to_owned(), reason: e.to_string() })
}

fn parse_backend_url(raw: Option<&str>) -> Result<BackendConfig, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    let lower = raw.to_ascii_lowercase();
    let host = lower
        .strip_prefix("http://")
        .or_else(|| lower.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidBackendUrl(raw.to_owned()))?;
    if host.trim_matches('/').is_empty() {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(BackendConfig::new(raw))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
