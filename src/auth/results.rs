//! Authentication result types
//!
//! Defines result values returned by registration and login operations.

use std::fmt;

/// Outcome of a login attempt.
///
/// An unknown username and a wrong password produce the same `Failure`
/// value, so callers cannot tell registered usernames apart from
/// unregistered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    Success,
    Failure,
}

impl LoginStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginStatus::Success)
    }

    /// Status line reported to the caller
    pub fn message(&self) -> &'static str {
        match self {
            LoginStatus::Success => "Login Successful",
            LoginStatus::Failure => "Invalid Credentials",
        }
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a registration
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    pub username: String,
    /// True when an existing entry for the username was overwritten
    pub replaced_existing: bool,
}
