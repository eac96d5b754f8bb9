use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PATH: &str = "inventory.json";
pub const DEFAULT_THRESHOLD: i64 = 5;

/// Where the inventory lives and what counts as low stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub path: PathBuf,
    pub threshold: i64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            path: PathBuf::from(DEFAULT_PATH),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Config> {
        let value = std::fs::read_to_string(path.into())?;
        let config: Config = serde_json::from_str(&value)?;
        Ok(config)
    }
}
