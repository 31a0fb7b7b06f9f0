//! Educational side-by-side of insecure (plaintext) and secure (salted
//! Argon2id) password storage over the same in-memory register/login
//! surface. See docs/password-handling.md for the prose comparison.

pub mod auth;
pub mod config;
pub mod demo;
pub mod error;

pub use auth::{CredentialTable, HashedRegistry, LoginStatus, PlaintextRegistry, RegisterOutcome};
