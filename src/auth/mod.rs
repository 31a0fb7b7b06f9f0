//! Authentication system
//!
//! Two credential registries with the same register/login surface: one
//! storing plaintext passwords (the cautionary variant), one storing
//! salted Argon2id hashes.

pub mod credentials;
pub mod hashed;
pub mod plaintext;
pub mod results;

pub use credentials::CredentialTable;
pub use hashed::HashedRegistry;
pub use plaintext::PlaintextRegistry;
pub use results::{LoginStatus, RegisterOutcome};
