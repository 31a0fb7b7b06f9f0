//! Hashed credential registry
//!
//! The secure variant: passwords are run through Argon2id with a
//! per-registration random salt and only the PHC-format hash string is
//! stored. Verification re-derives the hash from the salt embedded in the
//! stored string; the password is never recoverable from the table in
//! better than brute-force time.

use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use argon2::{Algorithm, Argon2, Params, Version};
use log::{info, warn};

use crate::auth::credentials::CredentialTable;
use crate::auth::results::{LoginStatus, RegisterOutcome};
use crate::config::HashingConfig;
use crate::error::HashingError;

/// Registry storing salted Argon2id hashes instead of passwords.
pub struct HashedRegistry {
    credentials: CredentialTable,
    hasher: Argon2<'static>,
}

impl HashedRegistry {
    /// Creates a registry with the argon2 crate defaults
    /// (Argon2id v19, m=19456 KiB, t=2, p=1).
    pub fn new() -> Self {
        Self {
            credentials: CredentialTable::new(),
            hasher: Argon2::default(),
        }
    }

    /// Creates a registry with an explicit work factor.
    pub fn with_config(config: &HashingConfig) -> Result<Self, HashingError> {
        let params = Params::new(
            config.memory_cost_kib,
            config.time_cost,
            config.parallelism,
            None,
        )
        .map_err(|e| HashingError::InvalidParams(e.to_string()))?;

        Ok(Self {
            credentials: CredentialTable::new(),
            hasher: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes `password` with a fresh random salt and stores the PHC string
    /// under `username`, overwriting any prior entry.
    ///
    /// Each call generates its own salt, so registering the same password
    /// twice stores two different credentials. Fails only if the hash
    /// primitive rejects its inputs, which cannot happen with parameters
    /// accepted by [`HashedRegistry::with_config`].
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<RegisterOutcome, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HashingError::HashFailed(e.to_string()))?;

        let prior = self
            .credentials
            .insert(username.to_string(), hash.to_string());

        info!(
            "registered '{}' (argon2id, replaced: {})",
            username,
            prior.is_some()
        );

        Ok(RegisterOutcome {
            username: username.to_string(),
            replaced_existing: prior.is_some(),
        })
    }

    /// Re-derives the hash from the salt embedded in the stored credential
    /// and compares it in constant time.
    ///
    /// Unknown usernames, wrong passwords, and unreadable stored entries
    /// all yield the same status; the hash is never reversed.
    pub fn login(&self, username: &str, password: &str) -> LoginStatus {
        let Some(stored) = self.credentials.get(username) else {
            info!("login failed for '{}'", username);
            return LoginStatus::Failure;
        };

        let parsed = match PasswordHash::new(stored) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("stored credential for '{}' is not a valid PHC string: {}", username, e);
                return LoginStatus::Failure;
            }
        };

        if self
            .hasher
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
        {
            info!("login succeeded for '{}'", username);
            LoginStatus::Success
        } else {
            info!("login failed for '{}'", username);
            LoginStatus::Failure
        }
    }

    /// Returns the stored PHC string for `username`, if any.
    ///
    /// The string carries the algorithm, version, work factor, and salt
    /// alongside the hash, e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`.
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

impl Default for HashedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reduced work factor so the suite stays quick; still legal Argon2id
    // inputs.
    fn fast_registry() -> HashedRegistry {
        let config = HashingConfig {
            memory_cost_kib: 64,
            time_cost: 1,
            parallelism: 1,
        };
        HashedRegistry::with_config(&config).expect("reduced parameters are valid")
    }

    #[test]
    fn register_then_login_succeeds() {
        let mut registry = fast_registry();
        registry.register("alice", "pw123").unwrap();
        assert_eq!(registry.login("alice", "pw123"), LoginStatus::Success);
    }

    #[test]
    fn wrong_password_fails() {
        let mut registry = fast_registry();
        registry.register("alice", "pw123").unwrap();
        assert_eq!(registry.login("alice", "wrong"), LoginStatus::Failure);
    }

    #[test]
    fn unknown_username_fails() {
        let registry = fast_registry();
        assert_eq!(registry.login("bob", "pw123"), LoginStatus::Failure);
    }

    #[test]
    fn stored_credential_is_not_the_password() {
        let mut registry = fast_registry();
        registry.register("alice", "pw123").unwrap();

        let stored = registry.stored_credential("alice").unwrap();
        assert_ne!(stored, "pw123");
        assert!(stored.starts_with("$argon2id$"));
    }

    #[test]
    fn same_password_under_two_usernames_stores_different_credentials() {
        let mut registry = fast_registry();
        registry.register("carol", "hunter2").unwrap();
        registry.register("dave", "hunter2").unwrap();

        let carol = registry.stored_credential("carol").unwrap();
        let dave = registry.stored_credential("dave").unwrap();
        assert_ne!(carol, dave);
    }

    #[test]
    fn reregistration_invalidates_the_old_password() {
        let mut registry = fast_registry();

        let first = registry.register("alice", "old-pw").unwrap();
        assert!(!first.replaced_existing);

        let second = registry.register("alice", "new-pw").unwrap();
        assert!(second.replaced_existing);

        assert_eq!(registry.login("alice", "old-pw"), LoginStatus::Failure);
        assert_eq!(registry.login("alice", "new-pw"), LoginStatus::Success);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn corrupted_stored_entry_reports_plain_failure() {
        let mut registry = fast_registry();
        registry
            .credentials
            .insert("mallory".into(), "not a phc string".into());

        assert_eq!(registry.login("mallory", "anything"), LoginStatus::Failure);
    }

    #[test]
    fn default_work_factor_produces_a_phc_string_with_crate_defaults() {
        let mut registry = HashedRegistry::new();
        registry.register("alice", "pw123").unwrap();

        let stored = registry.stored_credential("alice").unwrap();
        assert!(stored.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
    }

    #[test]
    fn invalid_work_factor_is_rejected_at_construction() {
        let config = HashingConfig {
            memory_cost_kib: 1,
            time_cost: 1,
            parallelism: 1,
        };
        assert!(HashedRegistry::with_config(&config).is_err());
    }
}
