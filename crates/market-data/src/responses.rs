use serde::Deserialize;

/// The body of `GET /coins/{id}/market_chart`.
///
/// Every series is a list of `[timestamp_ms, value]` pairs. Only the fields
/// the analysis needs are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}
