use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rebellion tuning, loaded once before the first tick and consumed
/// read-only by the weekly scheduler.
///
/// Field names serialize in PascalCase so existing `RebelliousConfig.json`
/// files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RebellionConfig {
    /// Fortified-settlement count at which a faction becomes eligible.
    pub fortification_rebellion_limit: u32,
    /// Divisor of the quadratic term; larger values flatten the curve.
    pub rebellion_chance_modifier: u32,
    /// Floor of the rebellion chance once a faction is eligible.
    pub minimum_chance_modifier: u32,
    /// Only target settlements whose culture differs from the faction's.
    pub only_rebel_in_different_culture_forts: bool,
    /// Only target castle-class fortifications.
    pub only_siege_castles: bool,
}

impl Default for RebellionConfig {
    fn default() -> Self {
        Self {
            fortification_rebellion_limit: 5,
            rebellion_chance_modifier: 50,
            minimum_chance_modifier: 10,
            only_rebel_in_different_culture_forts: false,
            only_siege_castles: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RebellionConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
