//! Plaintext credential registry
//!
//! The insecure variant: passwords go into the table verbatim, so anyone
//! who can read the table reads every password. Kept for side-by-side
//! contrast with the hashed variant; never use this outside a
//! demonstration.

use constant_time_eq::constant_time_eq;
use log::info;

use crate::auth::credentials::CredentialTable;
use crate::auth::results::{LoginStatus, RegisterOutcome};

/// Registry storing each password exactly as supplied.
pub struct PlaintextRegistry {
    credentials: CredentialTable,
}

impl PlaintextRegistry {
    pub fn new() -> Self {
        Self {
            credentials: CredentialTable::new(),
        }
    }

    /// Stores `password` verbatim under `username`, overwriting any prior
    /// entry.
    ///
    /// No strength, charset, or length checks; the operation cannot fail.
    pub fn register(&mut self, username: &str, password: &str) -> RegisterOutcome {
        let prior = self
            .credentials
            .insert(username.to_string(), password.to_string());

        info!(
            "registered '{}' (plaintext, replaced: {})",
            username,
            prior.is_some()
        );

        RegisterOutcome {
            username: username.to_string(),
            replaced_existing: prior.is_some(),
        }
    }

    /// Compares `password` against the stored value.
    ///
    /// Unknown usernames and wrong passwords yield the same status. The
    /// comparison itself runs in constant time; the weakness demonstrated
    /// by this variant is the storage, not the check.
    pub fn login(&self, username: &str, password: &str) -> LoginStatus {
        match self.credentials.get(username) {
            Some(stored) if constant_time_eq(stored.as_bytes(), password.as_bytes()) => {
                info!("login succeeded for '{}'", username);
                LoginStatus::Success
            }
            _ => {
                info!("login failed for '{}'", username);
                LoginStatus::Failure
            }
        }
    }

    /// Returns the stored credential for `username` — which is the password
    /// itself. Exists so the demo can show the leak.
    pub fn stored_credential(&self, username: &str) -> Option<&str> {
        self.credentials.get(username)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl Default for PlaintextRegistry {
    fn default() -> Self {
        Self::new()
    }
}
