//! User configuration.
//!
//! Settings live in `config.json` inside the grecent config directory (see
//! [`crate::core::dirs::get_config_directory`]). The file is optional; every key falls back to its
//! default, and command-line flags override whatever the file says.
//!
//! ```json
//! { "default_limit": 20, "tick_millis": 1000, "fetch_on_start": false }
//! ```

use crate::core::dirs::config_file;
use crate::core::error::{GrecentError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MIN_TICK_MILLIS: u64 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Branches shown when `-n` is not given
    pub default_limit: usize,
    /// How often relative ages are redrawn in the interactive view
    pub tick_millis: u64,
    /// Behave as if `--fetch` was always passed
    pub fetch_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: 10,
            tick_millis: 1000,
            fetch_on_start: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file()?)
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!("No config file at {}", config_file.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)?;
        let mut config: Self = serde_json::from_str(&content)
            .map_err(|e| GrecentError::config_parse_failed(config_file, e))?;

        if config.default_limit == 0 {
            log::warn!("default_limit must be positive, using the default");
            config.default_limit = Self::default().default_limit;
        }
        log::debug!("Loaded config from {}: {config:?}", config_file.display());
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(MIN_TICK_MILLIS))
    }
}
