use crate::enums::{FactorCategory, FactorId, SignalTag, VisualType};
use serde::{Deserialize, Serialize};

/// One time-bucketed observation of an instrument.
///
/// `price` is the closing price. `open`, `high` and `low` may be synthetic when
/// the upstream source only provides closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Bucket start, in milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    /// Display label for the bucket. Not used by any calculation.
    #[serde(default)]
    pub time: String,
}

/// A single computed trading factor.
///
/// This is the unit of output of the factor engine. A list of these is the
/// complete result of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    pub id: FactorId,
    pub name: String,
    pub description: String,
    /// Why the reading is interpreted the way it is.
    pub rationale: String,
    /// Pre-formatted factor value for display.
    pub value: String,
    pub signal: SignalTag,
    /// Directional score in `[-1, 1]`.
    pub score: f64,
    pub category: FactorCategory,
    /// Heuristic display weight in `[0, 1]`. Not a probability.
    pub confidence: f64,
    pub visual_type: VisualType,
}

impl Factor {
    /// Whether this factor carries a directional reading.
    pub fn is_active(&self) -> bool {
        self.signal != SignalTag::Neutral
    }
}
