//! Table configuration.
//!
//! Defaults match a 10/20 table. Values can come from JSON or from
//! `HOLDEM_*` environment variables; either way call [`GameConfig::validate`]
//! before use.

use crate::error::ValidationError;
use crate::game::{Blinds, MAX_PLAYERS, MIN_PLAYERS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub small_blind: u64,
    pub big_blind: u64,
    /// Minimum starting stack, in big blinds.
    pub min_stack_multiple: u64,
    pub min_players: usize,
    pub max_players: usize,
    /// Fixed shuffle seed for reproducible games.
    pub deck_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            min_stack_multiple: 10,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            deck_seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ValidationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `HOLDEM_SMALL_BLIND`, `HOLDEM_BIG_BLIND`,
    /// `HOLDEM_MIN_STACK_MULTIPLE` and `HOLDEM_DECK_SEED`. Unparseable values
    /// fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            small_blind: parse_env_or("HOLDEM_SMALL_BLIND", defaults.small_blind),
            big_blind: parse_env_or("HOLDEM_BIG_BLIND", defaults.big_blind),
            min_stack_multiple: parse_env_or(
                "HOLDEM_MIN_STACK_MULTIPLE",
                defaults.min_stack_multiple,
            ),
            deck_seed: std::env::var("HOLDEM_DECK_SEED").ok().and_then(|v| v.parse().ok()),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.blinds()?;
        if self.min_players < MIN_PLAYERS
            || self.max_players > MAX_PLAYERS
            || self.min_players > self.max_players
        {
            return Err(ValidationError::InvalidConfig(format!(
                "player limits {}..={} must lie within {MIN_PLAYERS}..={MAX_PLAYERS}",
                self.min_players, self.max_players
            )));
        }
        if self.min_stack_multiple == 0 {
            return Err(ValidationError::InvalidConfig(
                "min_stack_multiple must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn blinds(&self) -> Result<Blinds, ValidationError> {
        Blinds::new(self.small_blind, self.big_blind)
    }

    /// Smallest stack allowed to sit down.
    pub fn min_stack(&self) -> u64 {
        self.min_stack_multiple.saturating_mul(self.big_blind)
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = GameConfig::default();
        c.validate().unwrap();
        assert_eq!(c.min_stack(), 200);
        assert_eq!(c.blinds().unwrap().to_string(), "10/20");
    }

    #[test]
    fn json_fills_missing_fields() {
        let json = r#"{"small_blind": 25, "big_blind": 50, "deck_seed": 9}"#;
        let c = GameConfig::from_json(json).unwrap();
        assert_eq!(c.big_blind, 50);
        assert_eq!(c.min_stack_multiple, 10);
        assert_eq!(c.deck_seed, Some(9));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(GameConfig::from_json("{"), Err(ValidationError::InvalidConfig(_))));
        assert_eq!(
            GameConfig::from_json(r#"{"small_blind": 50, "big_blind": 20}"#),
            Err(ValidationError::InvalidBlinds { small: 50, big: 20 })
        );
        let c = GameConfig { max_players: 12, ..GameConfig::default() };
        assert!(c.validate().is_err());
        let c = GameConfig { min_stack_multiple: 0, ..GameConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn parse_env_or_falls_back() {
        assert_eq!(parse_env_or("HOLDEM_TEST_SURELY_UNSET", 42u64), 42);
    }
}
