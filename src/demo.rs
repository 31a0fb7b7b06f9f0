//! Demo walkthrough
//!
//! Runs both registries through the same registration/login script so the
//! stored credentials can be compared side by side. Output goes to stdout;
//! the log macros carry only usernames and outcomes, never passwords.

use log::info;

use crate::auth::{HashedRegistry, PlaintextRegistry};
use crate::config::DemoConfig;
use crate::error::DemoError;

/// Runs the full walkthrough: plaintext variant first, then the hashed one.
pub fn run_walkthrough(config: &DemoConfig) -> Result<(), DemoError> {
    run_plaintext_demo();
    run_hashed_demo(config)?;
    Ok(())
}

fn run_plaintext_demo() {
    println!("=== Insecure: plaintext storage ===\n");

    let mut registry = PlaintextRegistry::new();

    println!("1. Registration");
    registry.register("alice", "pw123");
    println!("   Registered 'alice'\n");

    println!("2. Login attempts");
    println!("   alice / pw123 -> {}", registry.login("alice", "pw123"));
    println!("   alice / wrong -> {}", registry.login("alice", "wrong"));
    println!("   bob   / pw123 -> {}", registry.login("bob", "pw123"));

    println!("\n3. What the table actually holds");
    if let Some(stored) = registry.stored_credential("alice") {
        println!("   stored credential for 'alice': \"{}\"", stored);
    }
    println!("   The password sits in memory verbatim; anyone who can read");
    println!("   the table reads every password.\n");
}

fn run_hashed_demo(config: &DemoConfig) -> Result<(), DemoError> {
    println!("=== Secure: salted Argon2id hashes ===\n");

    let mut registry = HashedRegistry::with_config(&config.hashing)?;

    println!("1. Registration");
    registry.register("alice", "pw123")?;
    println!("   Registered 'alice'\n");

    println!("2. Login attempts");
    println!("   alice / pw123 -> {}", registry.login("alice", "pw123"));
    println!("   alice / wrong -> {}", registry.login("alice", "wrong"));
    println!("   bob   / pw123 -> {}", registry.login("bob", "pw123"));

    println!("\n3. What the table actually holds");
    if let Some(stored) = registry.stored_credential("alice") {
        println!("   stored credential for 'alice':");
        println!("   {}", stored);
    }
    println!("   Algorithm, work factor, and salt travel inside the string;");
    println!("   the password itself is not recoverable from it.\n");

    println!("4. Salt uniqueness");
    registry.register("carol", "hunter2")?;
    registry.register("dave", "hunter2")?;
    if let (Some(carol), Some(dave)) = (
        registry.stored_credential("carol"),
        registry.stored_credential("dave"),
    ) {
        println!("   'carol' and 'dave' both registered the password \"hunter2\":");
        println!("   carol: {}", carol);
        println!("   dave:  {}", dave);
        println!("   credentials differ: {}", carol != dave);
    }

    println!("\n5. Re-registration overwrites");
    let outcome = registry.register("alice", "pw456")?;
    println!(
        "   re-registered 'alice' (replaced existing: {})",
        outcome.replaced_existing
    );
    println!("   alice / pw123 -> {}", registry.login("alice", "pw123"));
    println!("   alice / pw456 -> {}", registry.login("alice", "pw456"));

    info!("walkthrough complete ({} hashed entries)", registry.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashingConfig;

    #[test]
    fn walkthrough_runs_to_completion() {
        let config = DemoConfig {
            hashing: HashingConfig {
                memory_cost_kib: 64,
                time_cost: 1,
                parallelism: 1,
            },
        };
        assert!(run_walkthrough(&config).is_ok());
    }
}
