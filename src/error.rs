//! Error types
//!
//! Defines domain-specific error types for the hashing layer and the demo
//! binary. Login failures are not errors; they are reported through
//! [`crate::auth::LoginStatus`].

use std::fmt;

/// Hashing layer errors
#[derive(Debug)]
pub enum HashingError {
    InvalidParams(String),
    HashFailed(String),
}

impl fmt::Display for HashingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashingError::InvalidParams(msg) => write!(f, "Invalid hashing parameters: {}", msg),
            HashingError::HashFailed(msg) => write!(f, "Password hashing failed: {}", msg),
        }
    }
}

impl std::error::Error for HashingError {}

/// General demo error that encompasses all error types
#[derive(Debug)]
pub enum DemoError {
    Hashing(HashingError),
    Config(config::ConfigError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Hashing(e) => write!(f, "Hashing error: {}", e),
            DemoError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for DemoError {}

// Implement conversions from specific errors to DemoError
impl From<HashingError> for DemoError {
    fn from(error: HashingError) -> Self {
        DemoError::Hashing(error)
    }
}

impl From<config::ConfigError> for DemoError {
    fn from(error: config::ConfigError) -> Self {
        DemoError::Config(error)
    }
}
