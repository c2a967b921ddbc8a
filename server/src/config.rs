//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BANK_API_URL`: backend base URL, default `http://localhost:8080/api`
//! - `UPSTREAM_TIMEOUT_SECS`: whole-request timeout for proxied calls, default 30
//! - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BANK_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BANK_API_URL: {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `PORT` or `BANK_API_URL` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `PORT` or `BANK_API_URL` is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let api_url = parse_api_url(lookup("BANK_API_URL").as_deref())?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_secs(lookup("UPSTREAM_TIMEOUT_SECS").as_deref(), DEFAULT_UPSTREAM_TIMEOUT_SECS),
            connect_secs: parse_secs(
                lookup("UPSTREAM_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            ),
        };
        Ok(Self { port, api_url, timeouts })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BANK_API_URL);
    let url = reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidApiUrl(format!("{value}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl(format!("{value}: expected http or https")));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_secs(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
