use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one entry of the factor catalog.
///
/// The declaration order of the variants is the catalog order, and therefore
/// the order in which evaluated factors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactorId {
    #[serde(rename = "ALPHA_006")]
    Alpha006,
    #[serde(rename = "ALPHA_012")]
    Alpha012,
    #[serde(rename = "TS_RANK_20")]
    TsRank20,
    #[serde(rename = "STAT_SKEW")]
    StatSkew,
    #[serde(rename = "MATH_VOL_RATIO")]
    MathVolRatio,
    #[serde(rename = "TECH_ADX")]
    TechAdx,
    #[serde(rename = "REL_BTC_ALPHA")]
    RelBtcAlpha,
    #[serde(rename = "TECH_RSI")]
    TechRsi,
    #[serde(rename = "TECH_BOLL")]
    TechBoll,
    #[serde(rename = "ALPHA_009")]
    Alpha009,
    #[serde(rename = "TECH_MACD")]
    TechMacd,
}

impl FactorId {
    /// Every factor, in catalog order.
    pub const ALL: [FactorId; 11] = [
        FactorId::Alpha006,
        FactorId::Alpha012,
        FactorId::TsRank20,
        FactorId::StatSkew,
        FactorId::MathVolRatio,
        FactorId::TechAdx,
        FactorId::RelBtcAlpha,
        FactorId::TechRsi,
        FactorId::TechBoll,
        FactorId::Alpha009,
        FactorId::TechMacd,
    ];

    /// The configuration key of this factor (e.g. `"ALPHA_006"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorId::Alpha006 => "ALPHA_006",
            FactorId::Alpha012 => "ALPHA_012",
            FactorId::TsRank20 => "TS_RANK_20",
            FactorId::StatSkew => "STAT_SKEW",
            FactorId::MathVolRatio => "MATH_VOL_RATIO",
            FactorId::TechAdx => "TECH_ADX",
            FactorId::RelBtcAlpha => "REL_BTC_ALPHA",
            FactorId::TechRsi => "TECH_RSI",
            FactorId::TechBoll => "TECH_BOLL",
            FactorId::Alpha009 => "ALPHA_009",
            FactorId::TechMacd => "TECH_MACD",
        }
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactorId {
    type Err = CoreError;

    /// Parses a configuration key. Matching is case-insensitive so that CLI
    /// input like `tech_rsi` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        FactorId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| CoreError::UnknownFactor(key.to_string()))
    }
}

/// The directional reading of a single factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalTag {
    Bullish,
    Bearish,
    Neutral,
}

impl SignalTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalTag::Bullish => "BULLISH",
            SignalTag::Bearish => "BEARISH",
            SignalTag::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SignalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The family a factor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FactorCategory {
    #[serde(rename = "ALPHA101")]
    Alpha101,
    Math,
    Statistical,
    Trend,
    Relative,
    Momentum,
    Volatility,
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FactorCategory::Alpha101 => "ALPHA101",
            FactorCategory::Math => "MATH",
            FactorCategory::Statistical => "STATISTICAL",
            FactorCategory::Trend => "TREND",
            FactorCategory::Relative => "RELATIVE",
            FactorCategory::Momentum => "MOMENTUM",
            FactorCategory::Volatility => "VOLATILITY",
        };
        f.write_str(label)
    }
}

/// Hint for front-ends on which diagram illustrates the factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VisualType {
    Correlation,
    Reversion,
    Breakout,
    Trend,
    Divergence,
}
