//! PassLab - Entry Point
//!
//! Walks an in-memory user registry through registration and login twice:
//! once storing plaintext passwords, once storing salted Argon2id hashes.

use log::{error, info};

use passlab::config::DemoConfig;
use passlab::demo;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching password handling walkthrough...");

    let config = match DemoConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = demo::run_walkthrough(&config) {
        error!("Walkthrough failed: {}", e);
        std::process::exit(1);
    }
}
