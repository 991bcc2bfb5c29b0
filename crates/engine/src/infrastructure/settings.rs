//! Engine settings loaded from the environment.
//!
//! | Variable            | Meaning                                         |
//! |---------------------|-------------------------------------------------|
//! | `CREWROLL_RNG_SEED` | u64 seed; when set, every roll is replayable    |
//! | `CREWROLL_LOG`      | tracing filter (falls back to `RUST_LOG`)       |

use std::sync::Arc;

use thiserror::Error;

use crate::infrastructure::ports::RandomPort;
use crate::infrastructure::random::{SeededRandom, SystemRandom};

pub const RNG_SEED_VAR: &str = "CREWROLL_RNG_SEED";
pub const LOG_FILTER_VAR: &str = "CREWROLL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "crewroll_engine=debug";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{var} must be an unsigned 64-bit integer, got '{value}'")]
    InvalidSeed { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Seed for replayable sessions; `None` uses system randomness.
    pub rng_seed: Option<u64>,
    pub log_filter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            rng_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let rng_seed = match non_empty(RNG_SEED_VAR) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| SettingsError::InvalidSeed {
                var: RNG_SEED_VAR,
                value: raw.clone(),
            })?),
            None => None,
        };

        let log_filter = non_empty(LOG_FILTER_VAR)
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            rng_seed,
            log_filter,
        })
    }

    /// Random source these settings call for.
    pub fn random(&self) -> Arc<dyn RandomPort> {
        match self.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = EngineSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn parses_seed_and_filter() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (RNG_SEED_VAR, " 1234 "),
            (LOG_FILTER_VAR, "crewroll_engine=trace"),
        ]))
        .unwrap();
        assert_eq!(settings.rng_seed, Some(1234));
        assert_eq!(settings.log_filter, "crewroll_engine=trace");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let settings = EngineSettings::from_lookup(lookup(&[("RUST_LOG", "warn")])).unwrap();
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn rejects_bad_seed() {
        let err = EngineSettings::from_lookup(lookup(&[(RNG_SEED_VAR, "lucky")])).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidSeed {
                var: RNG_SEED_VAR,
                value: "lucky".to_string()
            }
        );
    }

    #[test]
    fn seeded_settings_replay_rolls() {
        let settings = EngineSettings {
            rng_seed: Some(7),
            ..EngineSettings::default()
        };
        let a = settings.random();
        let b = settings.random();
        assert_eq!(a.gen_range(1, 20), b.gen_range(1, 20));
    }
}
