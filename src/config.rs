//! TOML configuration for the cart policy, the kitchen and the simulator.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::error::ConfigError;


#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cart: CartConfig,
    pub kitchen: KitchenConfig,
    pub simulation: SimulationConfig,
}

/// What `update_quantity` does for an id that is not in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Leave the cart untouched; removed entries stay removed.
    #[default]
    Ignore,
    /// Re-insert the item from the catalog with the requested quantity.
    Recreate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CartConfig {
    pub update_policy: UpdatePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    pub workers: usize,
    pub buffer: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KitchenConfig {
    pub grill: StationConfig,
    pub tawa: StationConfig,
    pub drinks: StationConfig,
    /// Real time that stands in for one menu minute.
    pub minute_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub customers: usize,
    pub seed: u64,
    /// Dashboard redraw debounce.
    pub debounce_ms: u64,
}


impl Default for StationConfig {
    fn default() -> Self {
        StationConfig { workers: 2, buffer: 8 }
    }
}

impl Default for KitchenConfig {
    fn default() -> Self {
        KitchenConfig {
            grill: StationConfig { workers: 3, buffer: 12 },
            tawa: StationConfig::default(),
            drinks: StationConfig { workers: 2, buffer: 16 },
            minute_ms: 100,
        }
    }
}

impl KitchenConfig {
    pub fn minute(&self) -> Duration {
        Duration::from_millis(self.minute_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            customers: 8,
            seed: 42,
            debounce_ms: 120,
        }
    }
}

impl SimulationConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}


impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let stations = [
            ("kitchen.grill", &self.kitchen.grill),
            ("kitchen.tawa", &self.kitchen.tawa),
            ("kitchen.drinks", &self.kitchen.drinks),
        ];
        for (field, station) in stations {
            if station.workers == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "a station needs at least one worker".to_string(),
                });
            }
            if station.buffer == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "queue buffer must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}
