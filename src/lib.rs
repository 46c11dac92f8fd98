pub mod config;
pub mod ui;
pub mod upload;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ClipscopeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Transport error: {0}")]
    TransportError(String),
}

impl From<std::io::Error> for ClipscopeError {
    fn from(e: std::io::Error) -> Self {
        ClipscopeError::IOError(e.to_string())
    }
}

impl From<reqwest::Error> for ClipscopeError {
    fn from(e: reqwest::Error) -> Self {
        ClipscopeError::TransportError(e.to_string())
    }
}

impl ClipscopeError {
    /// Get a user-friendly description suitable for inline UI display
    pub fn user_message(&self) -> String {
        match self {
            ClipscopeError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            ClipscopeError::IOError(_) | ClipscopeError::TransportError(_) => {
                crate::upload::types::UPLOAD_FAILED_MESSAGE.to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClipscopeError>;
