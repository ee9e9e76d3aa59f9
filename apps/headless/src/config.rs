//! # Runner Configuration
//!
//! Loads `onlinestore.toml` with environment overrides.
//!
//! ## Load Order (later overrides earlier)
//! ```text
//! ┌──────────────┐   ┌───────────────────────┐   ┌──────────────┐   ┌──────────┐
//! │   Defaults   │──►│ onlinestore.toml      │──►│ Environment  │──►│ validate │
//! │              │   │ (explicit path or     │   │ ONLINESTORE_*│   │          │
//! │              │   │  platform config dir) │   │              │   │          │
//! └──────────────┘   └───────────────────────┘   └──────────────┘   └──────────┘
//! ```
//!
//! ## Environment Variables
//! | Variable | Overrides |
//! |----------|-----------|
//! | `ONLINESTORE_API_URL` | `api.base_url` |
//! | `ONLINESTORE_API_TIMEOUT_SECS` | `api.timeout_secs` |
//! | `ONLINESTORE_CURRENCY_SYMBOL` | `currency.symbol` |

use std::path::{Path, PathBuf};

use onlinestore_client::{ClientConfig, ClientError};
use onlinestore_core::{CurrencyFormat, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "onlinestore.toml";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ClientError> for ConfigError {
    fn from(err: ClientError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

// =============================================================================
// AppConfig
// =============================================================================

/// Complete runner configuration.
///
/// ## Example TOML
/// ```toml
/// [api]
/// base_url = "https://fakestoreapi.com"
/// timeout_secs = 10
///
/// [currency]
/// symbol = "€"
/// decimal_separator = ","
/// grouping_separator = "."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog client settings.
    #[serde(default)]
    pub api: ClientConfig,

    /// How cart totals are rendered.
    #[serde(default)]
    pub currency: CurrencyFormat,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// An explicit `config_path` must exist and parse. Without one, a missing
    /// file in the platform config directory means built-in defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading config from default location");
                    Self::from_file(&path)?
                }
                Some(path) => {
                    debug!(?path, "No config at default location, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file without overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.currency.validate()?;
        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("ONLINESTORE_API_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = env("ONLINESTORE_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric ONLINESTORE_API_TIMEOUT_SECS"),
            }
        }

        if let Some(symbol) = env("ONLINESTORE_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "onlinestore", "onlinestore")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
