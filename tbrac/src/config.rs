//! Core configuration.
//!
//! Tunable defaults for handicaps, eliminators, rematch avoidance and
//! bracket draws, loaded from `TBRAC_*` environment variables.

use crate::bracket::BracketSize;
use crate::scoring::{DEFAULT_HANDICAP_BASE, DEFAULT_HANDICAP_PERCENTAGE, HandicapConfig};
use crate::shuffle::Shuffler;
use crate::types::Pins;
use serde::{Deserialize, Serialize};

/// Default share of an eliminator field cut each game
pub const DEFAULT_ELIMINATION_PERCENTAGE: f64 = 0.5;

/// Default number of draws tried by rematch avoidance
pub const DEFAULT_REMATCH_ATTEMPTS: u32 = 100;

/// Complete core configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    pub handicap: HandicapConfig,
    /// Fraction of active eliminator entrants at or above the cut (0.0 - 1.0)
    pub elimination_percentage: f64,
    /// Candidate draws tried before accepting a rematch
    pub rematch_attempts: u32,
    pub bracket_size: BracketSize,
    /// Fixed shuffle seed for reproducible draws
    pub seed: Option<u64>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            handicap: HandicapConfig::default(),
            elimination_percentage: DEFAULT_ELIMINATION_PERCENTAGE,
            rematch_attempts: DEFAULT_REMATCH_ATTEMPTS,
            bracket_size: BracketSize::Eight,
            seed: None,
        }
    }
}

impl CoreConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults, except
    /// `TBRAC_BRACKET_SIZE`, which must name a standard size when set.
    ///
    /// # Returns
    ///
    /// * `Result<CoreConfig, ConfigError>` - Loaded configuration or error
    ///
    /// # Errors
    ///
    /// Returns error if a value is out of range (see [`CoreConfig::validate`])
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_handicap = std::env::var("TBRAC_MAX_HANDICAP")
            .ok()
            .and_then(|v| v.parse::<Pins>().ok());

        let handicap = HandicapConfig {
            base: parse_env_or("TBRAC_HANDICAP_BASE", DEFAULT_HANDICAP_BASE),
            percentage: parse_env_or("TBRAC_HANDICAP_PERCENTAGE", DEFAULT_HANDICAP_PERCENTAGE),
            max_handicap,
        };

        let bracket_size = match std::env::var("TBRAC_BRACKET_SIZE") {
            Ok(raw) => parse_bracket_size(&raw)?,
            Err(_) => BracketSize::Eight,
        };

        let seed = std::env::var("TBRAC_SEED")
            .ok()
            .and_then(|v| v.parse().ok());

        let config = CoreConfig {
            handicap,
            elimination_percentage: parse_env_or(
                "TBRAC_ELIMINATION_PERCENTAGE",
                DEFAULT_ELIMINATION_PERCENTAGE,
            ),
            rematch_attempts: parse_env_or("TBRAC_REMATCH_ATTEMPTS", DEFAULT_REMATCH_ATTEMPTS),
            bracket_size,
            seed,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.handicap.base <= 0 {
            return Err(ConfigError::Invalid {
                var: "TBRAC_HANDICAP_BASE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.handicap.percentage) {
            return Err(ConfigError::Invalid {
                var: "TBRAC_HANDICAP_PERCENTAGE".to_string(),
                reason: format!("Must be between 0 and 1 (got {})", self.handicap.percentage),
            });
        }

        if let Some(max) = self.handicap.max_handicap
            && max < 0
        {
            return Err(ConfigError::Invalid {
                var: "TBRAC_MAX_HANDICAP".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.elimination_percentage) {
            return Err(ConfigError::Invalid {
                var: "TBRAC_ELIMINATION_PERCENTAGE".to_string(),
                reason: format!(
                    "Must be between 0 and 1 (got {})",
                    self.elimination_percentage
                ),
            });
        }

        if self.rematch_attempts == 0 {
            return Err(ConfigError::Invalid {
                var: "TBRAC_REMATCH_ATTEMPTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Shuffler honouring the configured seed
    pub fn shuffler(&self) -> Shuffler {
        Shuffler::from_optional_seed(self.seed)
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse a bracket size given as an entrant count
pub fn parse_bracket_size(raw: &str) -> Result<BracketSize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| BracketSize::try_from(n).ok())
        .ok_or_else(|| ConfigError::Invalid {
            var: "TBRAC_BRACKET_SIZE".to_string(),
            reason: format!("Expected 4, 8, 12, 16, 32 or 64 (got {:?})", raw),
        })
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "TBRAC_HANDICAP_BASE",
        "TBRAC_HANDICAP_PERCENTAGE",
        "TBRAC_MAX_HANDICAP",
        "TBRAC_ELIMINATION_PERCENTAGE",
        "TBRAC_REMATCH_ATTEMPTS",
        "TBRAC_BRACKET_SIZE",
        "TBRAC_SEED",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: serialized by #[serial]; no other thread reads the environment
            unsafe { std::env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: serialized by #[serial]; no other thread reads the environment
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = CoreConfig::from_env().unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("TBRAC_HANDICAP_BASE", "210");
        set_env("TBRAC_HANDICAP_PERCENTAGE", "0.8");
        set_env("TBRAC_MAX_HANDICAP", "60");
        set_env("TBRAC_BRACKET_SIZE", "12");
        set_env("TBRAC_SEED", "42");

        let config = CoreConfig::from_env().unwrap();
        assert_eq!(config.handicap.base, 210);
        assert_eq!(config.handicap.max_handicap, Some(60));
        assert_eq!(config.bracket_size, BracketSize::Twelve);
        assert_eq!(config.seed, Some(42));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_bracket_size() {
        clear_env();
        set_env("TBRAC_BRACKET_SIZE", "10");
        let err = CoreConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "TBRAC_BRACKET_SIZE"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_out_of_range_percentage() {
        clear_env();
        set_env("TBRAC_ELIMINATION_PERCENTAGE", "1.5");
        assert!(CoreConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = CoreConfig {
            rematch_attempts: 0,
            ..CoreConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validate_negative_max_handicap() {
        let config = CoreConfig {
            handicap: HandicapConfig::default().with_max(-1),
            ..CoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "TBRAC_SEED".to_string(),
            reason: "bad".to_string(),
        };
        assert!(err.to_string().contains("TBRAC_SEED"));
    }

    #[test]
    fn test_seeded_shuffler_is_reproducible() {
        let config = CoreConfig {
            seed: Some(7),
            ..CoreConfig::default()
        };
        let a = config.shuffler().shuffled(&[1, 2, 3, 4, 5]);
        let b = config.shuffler().shuffled(&[1, 2, 3, 4, 5]);
        assert_eq!(a, b);
    }
}
