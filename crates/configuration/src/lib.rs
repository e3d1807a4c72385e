use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod factor_config;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use factor_config::FactorConfig;
pub use settings::{AnalysisParams, Config, MarketDataSettings};

/// Prefix of environment variables that override file values,
/// e.g. `ALPHADESK__ANALYSIS__ADX_PERIOD=21`.
pub const ENV_PREFIX: &str = "ALPHADESK";

/// Loads the application configuration from a TOML file.
///
/// The file is optional: any section that is missing falls back to its
/// defaults. Environment variables prefixed with [`ENV_PREFIX`] are layered on
/// top. The resulting configuration is validated before it is returned.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    finish(builder)
}

/// Parses a configuration from TOML text. Environment overrides are not applied.
pub fn load_config_str(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(builder)
}

fn finish(builder: config::Config) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;
    tracing::debug!(
        adx_period = config.analysis.adx_period,
        enabled = config.factors.enabled_ids().len(),
        "Configuration loaded"
    );
    Ok(config)
}
