//! Host settings read from the environment.

use std::time::Duration;
use thiserror::Error;
use tictactoe_core::{GameSession, DEFAULT_OPPONENT_DELAY};

/// Delay before the automated opponent moves, in milliseconds
pub const OPPONENT_DELAY_VAR: &str = "TICTACTOE_OPPONENT_DELAY_MS";

/// Seed for the automated opponent
pub const SEED_VAR: &str = "TICTACTOE_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings for one host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub opponent_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            opponent_delay: DEFAULT_OPPONENT_DELAY,
            seed: None,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(OPPONENT_DELAY_VAR) {
            let millis = parse_u64(OPPONENT_DELAY_VAR, &value)?;
            config.opponent_delay = Duration::from_millis(millis);
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_u64(SEED_VAR, &value)?);
        }

        Ok(config)
    }

    /// A fresh, uninitialized session using these settings
    pub fn build_session(&self) -> GameSession {
        let session = match self.seed {
            Some(seed) => GameSession::with_seed(seed),
            None => GameSession::new(),
        };
        session.with_opponent_delay(self.opponent_delay)
    }
}

fn parse_u64(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
