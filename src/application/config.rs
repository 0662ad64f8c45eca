//! Runtime configuration read from the environment.

use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Timing and randomness settings for the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Interval between timer ticks; each tick adds one second to the clock.
    pub tick_interval: Duration,
    /// How long a mismatched pair stays face-up before turning back.
    pub mismatch_delay: Duration,
    /// Seed for the deck shuffle. `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);
    pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

    pub const SEED_VAR: &'static str = "MATCHING_SEED";
    pub const MISMATCH_DELAY_VAR: &'static str = "MATCHING_MISMATCH_DELAY_MS";

    pub fn new() -> Self {
        Self {
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            mismatch_delay: Self::DEFAULT_MISMATCH_DELAY,
            seed: None,
        }
    }

    /// Set a fixed shuffle seed (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MATCHING_SEED` - shuffle seed (default: clock-derived)
    /// - `MATCHING_MISMATCH_DELAY_MS` - mismatch display time (default: 1000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Some(seed) = parse_var::<u64>(&lookup, Self::SEED_VAR)? {
            config.seed = Some(seed);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, Self::MISMATCH_DELAY_VAR)? {
            config.mismatch_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
