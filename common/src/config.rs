use std::{env, str::FromStr};

use dotenvy;
use thiserror::Error;

use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_CELL_SIZE, DEFAULT_TICK_RATE,
    MAX_TICK_RATE,
};

pub const WIDTH_KEY: &str = "MAZE_WIDTH";
pub const HEIGHT_KEY: &str = "MAZE_HEIGHT";
pub const CELL_SIZE_KEY: &str = "MAZE_CELL_SIZE";
pub const TICK_RATE_KEY: &str = "MAZE_TICK_RATE";
pub const SEED_KEY: &str = "MAZE_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("a {width}x{height} canvas can't fit a single {cell_size}px cell")]
    CanvasTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("tick rate {0} is above the maximum of {max}", max = MAX_TICK_RATE)]
    TickRateOutOfRange(u32),
}

/// Startup settings. Read once; the tick rate is only the initial value of
/// the slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub tick_rate: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}

impl Config {
    /// Loads `.env` if there is one, then reads the `MAZE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let config = Config {
            width: parse(&lookup, WIDTH_KEY)?.unwrap_or(defaults.width),
            height: parse(&lookup, HEIGHT_KEY)?.unwrap_or(defaults.height),
            cell_size: parse(&lookup, CELL_SIZE_KEY)?.unwrap_or(defaults.cell_size),
            tick_rate: parse(&lookup, TICK_RATE_KEY)?.unwrap_or(defaults.tick_rate),
            seed: parse(&lookup, SEED_KEY)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(ConfigError::CanvasTooSmall {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }

        if self.tick_rate > MAX_TICK_RATE {
            return Err(ConfigError::TickRateOutOfRange(self.tick_rate));
        }

        Ok(())
    }

    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    pub fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let value = raw.trim().trim_matches('"').trim_matches('\'');
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.rows(), 15);
        assert_eq!(config.cols(), 15);
    }

    #[test]
    fn grid_dimensions_round_down() {
        let config = Config::from_lookup(lookup_from(&[
            (WIDTH_KEY, "250"),
            (HEIGHT_KEY, "99"),
            (CELL_SIZE_KEY, "40"),
            (TICK_RATE_KEY, "0"),
            (SEED_KEY, "'42'"),
        ]))
        .unwrap();

        assert_eq!(config.cols(), 6);
        assert_eq!(config.rows(), 2);
        assert_eq!(config.tick_rate, 0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn malformed_values_are_reported_with_their_key() {
        let result = Config::from_lookup(lookup_from(&[(CELL_SIZE_KEY, "big")]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                key: CELL_SIZE_KEY,
                value: "big".to_string()
            })
        );
    }

    #[test]
    fn impossible_dimensions_are_rejected() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[(CELL_SIZE_KEY, "0")])),
            Err(ConfigError::ZeroCellSize)
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[(WIDTH_KEY, "30")])),
            Err(ConfigError::CanvasTooSmall {
                width: 30,
                height: 600,
                cell_size: 40
            })
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[(TICK_RATE_KEY, "101")])),
            Err(ConfigError::TickRateOutOfRange(101))
        );
    }
}
