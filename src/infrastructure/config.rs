//! # Application Configuration
//!
//! Layered settings: built-in defaults, then an optional file, then
//! environment variables.
//!
//! Environment variables use the `TRANSFER_SCHEDULER` prefix and `__` as
//! the nesting separator, e.g. `TRANSFER_SCHEDULER__LOGGING__LEVEL=debug`.
//! A `.env` file in the working directory is loaded first when present.
//!
//! # Example file
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [fees]
//! seed_standard_tiers = false
//!
//! [[fees.tiers]]
//! name = "Flat"
//! min_days = 0
//! fixed_fee = "5.00"
//! percentage_fee = "0"
//! ```

use crate::domain::entities::FeeTier;
use crate::infrastructure::seed::standard_fee_tiers;
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix of environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "TRANSFER_SCHEDULER";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A source could not be read or did not match the expected shape.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// A fee tier declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTierConfig {
    /// Display name.
    pub name: String,
    /// Inclusive lower bound in days.
    pub min_days: i64,
    /// Inclusive upper bound in days; absent means unbounded.
    #[serde(default)]
    pub max_days: Option<i64>,
    /// Fixed part of the fee.
    pub fixed_fee: Decimal,
    /// Proportional part of the fee, as a fraction.
    pub percentage_fee: Decimal,
}

impl FeeTierConfig {
    /// Builds a domain tier with a fresh identifier.
    #[must_use]
    pub fn to_fee_tier(&self) -> FeeTier {
        FeeTier::new(
            self.name.clone(),
            self.min_days,
            self.max_days,
            self.fixed_fee,
            self.percentage_fee,
        )
    }
}

/// Fee catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeesConfig {
    /// Use the standard catalog when no tiers are listed.
    pub seed_standard_tiers: bool,
    /// Explicit catalog, in selection order.
    pub tiers: Vec<FeeTierConfig>,
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            seed_standard_tiers: true,
            tiers: Vec::new(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Fee catalog settings.
    pub fees: FeesConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, `path` (if given) and the environment.
    ///
    /// The file format is chosen from the extension (TOML, YAML, JSON, ...).
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` if `path` does not exist
    /// - `ConfigError::Invalid` if a source cannot be parsed or has the wrong shape
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(
            level = %config.logging.level,
            tiers = config.fees.tiers.len(),
            seed = config.fees.seed_standard_tiers,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Returns the fee catalog to start with.
    ///
    /// Explicit tiers win; otherwise the standard catalog when seeding is
    /// enabled; otherwise nothing.
    #[must_use]
    pub fn fee_tiers(&self) -> Vec<FeeTier> {
        if !self.fees.tiers.is_empty() {
            self.fees.tiers.iter().map(FeeTierConfig::to_fee_tier).collect()
        } else if self.fees.seed_standard_tiers {
            standard_fee_tiers()
        } else {
            Vec::new()
        }
    }
}
