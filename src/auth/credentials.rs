//! Credential storage
//!
//! Defines the in-memory table mapping usernames to stored credentials.
//! The table is a plain owned value passed to the operations that use it,
//! not process-wide static state.

use std::collections::HashMap;

/// In-memory credential table owned by a registry.
///
/// Maps each username to its stored credential: the raw password in the
/// plaintext variant, an Argon2id PHC string in the hashed variant. Entries
/// live exactly as long as the table; there is no persistence, no expiry,
/// and no removal operation.
pub struct CredentialTable {
    entries: HashMap<String, String>,
}

impl CredentialTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts or overwrites the credential for `username`.
    ///
    /// Returns the previously stored credential when the username was
    /// already registered, so callers can observe the silent overwrite.
    pub fn insert(&mut self, username: String, credential: String) -> Option<String> {
        self.entries.insert(username, credential)
    }

    /// Returns the stored credential for `username`, if any.
    pub fn get(&self, username: &str) -> Option<&str> {
        self.entries.get(username).map(String::as_str)
    }

    /// Returns whether an entry exists for `username`.
    pub fn contains_user(&self, username: &str) -> bool {
        self.entries.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self::new()
    }
}
