use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from file: {0}")]
    LoadError(#[from] config::ConfigError),

    /// A window or period in `[analysis]` is zero.
    #[error("analysis.{field} must be greater than zero")]
    InvalidWindow { field: &'static str },

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
