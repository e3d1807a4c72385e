use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the combined reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalLabel {
    Long,
    Short,
    Neutral,
}

impl SignalLabel {
    /// Human-readable label, e.g. `"Alpha Long"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalLabel::Long => "Alpha Long",
            SignalLabel::Short => "Alpha Short",
            SignalLabel::Neutral => "Alpha Neutral",
        }
    }
}

impl fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregated verdict over one factor list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSignal {
    pub label: SignalLabel,
    /// Unweighted mean of all factor scores, in `[-1, 1]`.
    pub mean_score: f64,
    /// Number of factors that went into the mean.
    pub factor_count: usize,
    /// Number of factors with a non-neutral signal.
    pub active_count: usize,
}

impl Default for OverallSignal {
    fn default() -> Self {
        Self {
            label: SignalLabel::Neutral,
            mean_score: 0.0,
            factor_count: 0,
            active_count: 0,
        }
    }
}
