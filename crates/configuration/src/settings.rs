use crate::error::ConfigError;
use crate::factor_config::FactorConfig;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisParams,
    pub factors: FactorConfig,
    pub market_data: MarketDataSettings,
}

impl Config {
    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.market_data.validate()
    }
}

/// Tunable window lengths for the factor engine.
///
/// Only `adx_period` is consumed by the current catalog. The other windows are
/// carried so that callers can persist a complete parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    #[serde(alias = "windowShort")]
    pub window_short: usize,
    #[serde(alias = "windowLong")]
    pub window_long: usize,
    #[serde(alias = "volatilityWindow")]
    pub volatility_window: usize,
    #[serde(alias = "adxPeriod")]
    pub adx_period: usize,
}

impl AnalysisParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("window_short", self.window_short),
            ("window_long", self.window_long),
            ("volatility_window", self.volatility_window),
            ("adx_period", self.adx_period),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(ConfigError::InvalidWindow { field: name });
            }
        }
        Ok(())
    }
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            window_short: 5,
            window_long: 20,
            volatility_window: 14,
            adx_period: 14,
        }
    }
}

/// Where price series come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataSettings {
    /// Base URL of the CoinGecko v3 API.
    pub base_url: String,
    /// Optional CoinGecko pro API key.
    pub api_key: Option<String>,
    /// CoinGecko id of the benchmark instrument.
    pub reference_coin: String,
    /// Number of daily buckets to request.
    pub days: u32,
    pub timeout_secs: u64,
}

impl MarketDataSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::ValidationError(
                "market_data.days must be greater than zero".to_string(),
            ));
        }
        if self.reference_coin.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "market_data.reference_coin cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MarketDataSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            api_key: None,
            reference_coin: "bitcoin".to_string(),
            days: 90,
            timeout_secs: 30,
        }
    }
}
