//! Loading rounding configuration
//!
//! Settings come from a configuration file and/or environment variables,
//! with the environment taking precedence:
//!
//! * `MONEY_DECIMAL_PLACES` - granularity in decimal places (default: 2)
//! * `MONEY_MODE` - rounding rule, e.g. `half_even`, `half_up`, `floor`
//!   (default: `half_even`)
//! * `MONEY_CENT_FACTOR` - granularity as a factor such as `.001`; overrides
//!   `MONEY_DECIMAL_PLACES` when both are set
//!
//! ```rust,ignore
//! use money_kernel::RoundingConfig;
//!
//! RoundingConfig::from_env()?.install()?;
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::error::CoreError;
use crate::rounding::{RoundingConfig, RoundingMode};

/// Environment prefix for rounding settings
pub const ENV_PREFIX: &str = "MONEY";

/// Raw settings as read from the sources, before defaults apply
#[derive(Debug, Default, Deserialize)]
struct RoundingSettings {
    decimal_places: Option<u32>,
    mode: Option<RoundingMode>,
    cent_factor: Option<String>,
}

impl RoundingSettings {
    fn resolve(self) -> Result<RoundingConfig, CoreError> {
        let mut config = match self.cent_factor {
            Some(factor) => RoundingConfig::from_cent_factor(&factor)?,
            None => RoundingConfig {
                decimal_places: self
                    .decimal_places
                    .unwrap_or(RoundingConfig::default().decimal_places),
                ..RoundingConfig::default()
            },
        };
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }

        config.validate()?;
        Ok(config)
    }
}

impl RoundingConfig {
    /// Loads configuration from `MONEY_*` environment variables
    pub fn from_env() -> Result<Self, CoreError> {
        Self::load(None)
    }

    /// Loads configuration from environment variables with a custom prefix
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, CoreError> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix(prefix))
            .build()?;
        Self::from_settings(settings)
    }

    /// Loads configuration from an optional file, overridden by `MONEY_*`
    /// environment variables
    ///
    /// The file format follows its extension (`.toml`, `.json`, `.yaml`, ...).
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Self::from_settings(settings)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(source: &str) -> Result<Self, CoreError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, CoreError> {
        let raw: RoundingSettings = settings.try_deserialize()?;
        let config = raw.resolve()?;
        tracing::debug!(
            decimal_places = config.decimal_places,
            mode = ?config.mode,
            "loaded rounding configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_gives_defaults() {
        let config = RoundingConfig::from_toml("").unwrap();
        assert_eq!(config, RoundingConfig::default());
    }

    #[test]
    fn test_toml_settings() {
        let config = RoundingConfig::from_toml(
            r#"
            decimal_places = 3
            mode = "half_up"
            "#,
        )
        .unwrap();
        assert_eq!(config, RoundingConfig::new(3, RoundingMode::HalfUp));
    }

    #[test]
    fn test_cent_factor_overrides_decimal_places() {
        let config = RoundingConfig::from_toml(
            r#"
            decimal_places = 4
            cent_factor = ".001"
            "#,
        )
        .unwrap();
        assert_eq!(config.decimal_places, 3);
        assert_eq!(config.mode, RoundingMode::HalfEven);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        assert!(RoundingConfig::from_toml("decimal_places = 40").is_err());
        assert!(RoundingConfig::from_toml("mode = \"sideways\"").is_err());
        assert!(RoundingConfig::from_toml("cent_factor = \"9,1\"").is_err());
    }

    #[test]
    fn test_environment_settings() {
        std::env::set_var("MONEYTEST_DECIMAL_PLACES", "4");
        std::env::set_var("MONEYTEST_MODE", "floor");

        let config = RoundingConfig::from_env_with_prefix("MONEYTEST").unwrap();
        assert_eq!(config, RoundingConfig::new(4, RoundingMode::Floor));

        std::env::remove_var("MONEYTEST_DECIMAL_PLACES");
        std::env::remove_var("MONEYTEST_MODE");
    }
}
