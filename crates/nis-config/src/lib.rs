//! # nis-config
//!
//! Layered configuration loading for nextinspace using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEXTINSPACE_*` prefix, `__` as separator)
//! 2. Project-level `./nextinspace.toml`
//! 3. User-level `~/.config/nextinspace/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NEXTINSPACE_API__TIMEOUT_SECS` -> `api.timeout_secs`,
//! `NEXTINSPACE_GENERAL__DEFAULT_COUNT` -> `general.default_count`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nis_config::NisConfig;
//!
//! let config = NisConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "nextinspace.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NisConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NisConfig {
    /// Load and validate configuration from TOML files and environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Same as [`NisConfig::load`], after loading `.env` from the current
    /// directory if present.
    ///
    /// # Errors
    ///
    /// See [`NisConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`NisConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("NEXTINSPACE_").split("__"))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        if self.general.default_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_count".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nextinspace").join("config.toml"))
    }
}
