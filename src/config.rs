//! Configuration management
//!
//! Loads the Argon2id work factor from config.toml with environment
//! overrides, falling back to the argon2 crate defaults when no file is
//! present. The work factor is the only configurable surface of the demo.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Complete demo configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DemoConfig {
    #[serde(flatten)]
    pub hashing: HashingConfig,
}

/// Argon2id work factor
///
/// These are the "adaptive" knobs of adaptive hashing: raising them makes
/// every guess cost an attacker more memory and more time. Lowering them
/// below the validated floor would let the hash degenerate into something
/// cheap to brute-force.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_cost_kib: u32,

    /// Number of passes over memory
    pub time_cost: u32,

    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        // argon2 crate defaults: 19 MiB, 2 passes, 1 lane
        Self {
            memory_cost_kib: 19_456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl DemoConfig {
    /// Load configuration from config.toml (optional) with PASSLAB_*
    /// environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("PASSLAB"))
            .build()?;

        let config: DemoConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.hashing.time_cost == 0 {
            return Err(ConfigError::Message(
                "time_cost must be greater than 0".into(),
            ));
        }

        if self.hashing.parallelism == 0 {
            return Err(ConfigError::Message(
                "parallelism must be greater than 0".into(),
            ));
        }

        // Argon2 requires at least 8 KiB of memory per lane
        if self.hashing.memory_cost_kib < 8 * self.hashing.parallelism {
            return Err(ConfigError::Message(
                "memory_cost_kib must be at least 8 KiB per lane".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_argon2_crate_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.hashing.memory_cost_kib, 19_456);
        assert_eq!(config.hashing.time_cost, 2);
        assert_eq!(config.hashing.parallelism, 1);
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_time_cost_is_rejected() {
        let config = DemoConfig {
            hashing: HashingConfig {
                time_cost: 0,
                ..HashingConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_parallelism_is_rejected() {
        let config = DemoConfig {
            hashing: HashingConfig {
                parallelism: 0,
                ..HashingConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn memory_below_the_per_lane_floor_is_rejected() {
        let config = DemoConfig {
            hashing: HashingConfig {
                memory_cost_kib: 16,
                time_cost: 1,
                parallelism: 4,
            },
        };
        assert!(config.validate().is_err());
    }
}
