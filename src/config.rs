//! Application configuration
//!
//! The only tunable is the base URL of the analysis backend.

use crate::{ClipscopeError, Result};

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "CLIPSCOPE_BASE_URL";

/// Default backend address when no override is present
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for the client
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the analysis backend
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    /// Set the backend base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClipscopeError::ConfigError(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}
