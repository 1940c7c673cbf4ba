//! Configuration module

use std::time::Duration;

use crate::constants;
use crate::error::{ConsoleError, ConsoleResult};

/// Console configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scoring engine, without trailing slash
    pub engine_url: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine_url: constants::DEFAULT_ENGINE_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ConsoleResult<Self> {
        Self::new(constants::get_engine_url(), constants::get_timeout_secs())
    }

    /// Build a configuration, normalizing the URL
    pub fn new(engine_url: impl Into<String>, timeout_secs: u64) -> ConsoleResult<Self> {
        let engine_url = engine_url.into().trim().trim_end_matches('/').to_string();

        if !(engine_url.starts_with("http://") || engine_url.starts_with("https://")) {
            return Err(ConsoleError::Config(format!(
                "engine URL must start with http:// or https://, got '{}'",
                engine_url
            )));
        }
        if timeout_secs == 0 {
            return Err(ConsoleError::Config("timeout must be at least 1 second".to_string()));
        }

        Ok(Self { engine_url, timeout_secs })
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.engine_url, path)
    }
}
