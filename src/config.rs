//! Centralized configuration management for edgar13f

use std::time::Duration;
use anyhow::{Result, Context};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.sec.gov";
pub const DEFAULT_USER_AGENT: &str = "edgar13f/0.1.0 (contact@example.com)";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the EDGAR host; search and archive paths are joined onto it
    pub base_url: String,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string. EDGAR refuses requests without one.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("EDGAR13F_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let http = HttpConfig {
            timeout_seconds: parse_env_var("EDGAR13F_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("EDGAR13F_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        };

        Ok(Config { base_url, http })
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Parsed form of `base_url`
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .with_context(|| format!("Invalid EDGAR base URL: {}", self.base_url))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.base()?;

        if self.http.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("HTTP timeout must be greater than zero seconds"));
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(anyhow::anyhow!("User agent must not be empty"));
        }

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://www.sec.gov");
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
        assert!(config.http.user_agent.starts_with("edgar13f/"));
    }

    #[test]
    fn test_config_validation() {
        Config::default().validate().unwrap();

        let bad_url = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(bad_url.validate().is_err());

        let zero_timeout = Config {
            http: HttpConfig { timeout_seconds: 0, ..HttpConfig::default() },
            ..Config::default()
        };
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_parse_env_var_missing_is_none() {
        let value: Option<u64> = parse_env_var("EDGAR13F_TEST_UNSET_VARIABLE").unwrap();
        assert!(value.is_none());
    }
}
