use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Connection string. Empty disables reporting.
    pub dsn: String,
    /// Timeout applied to each event POST
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the per-request timeout. A zero timeout is rejected.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Load configuration from environment variables
    ///
    /// - `SENTRY_DSN`: connection string (unset means reporting disabled)
    /// - `CRAVEN_TIMEOUT_SECS`: request timeout, defaults to 30
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs: u64 = env::var("CRAVEN_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(env::var("SENTRY_DSN").unwrap_or_default())
            .with_timeout(Duration::from_secs(timeout_secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("")
    }
}
