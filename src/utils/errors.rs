//! Error handling for GeoBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for GeoBuddy application
#[derive(Error, Debug)]
pub enum GeoBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Country lookup error: {0}")]
    Country(#[from] CountryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Countries API specific errors
#[derive(Error, Debug)]
pub enum CountryError {
    #[error("No country matches '{0}'")]
    NotFound(String),

    #[error("Country lookup failed: {0}")]
    LookupFailed(String),
}

/// Result type alias for GeoBuddy operations
pub type Result<T> = std::result::Result<T, GeoBuddyError>;

/// Result type alias for country lookups
pub type CountryResult<T> = std::result::Result<T, CountryError>;

impl GeoBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            GeoBuddyError::Telegram(_) => true,
            GeoBuddyError::Country(_) => true,
            GeoBuddyError::Config(_) => false,
            GeoBuddyError::Http(_) => true,
            GeoBuddyError::Serialization(_) => false,
            GeoBuddyError::Io(_) => true,
            GeoBuddyError::UrlParse(_) => false,
            GeoBuddyError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GeoBuddyError::Config(_) => ErrorSeverity::Critical,
            GeoBuddyError::Serialization(_) => ErrorSeverity::Critical,
            GeoBuddyError::Country(CountryError::NotFound(_)) => ErrorSeverity::Info,
            GeoBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
