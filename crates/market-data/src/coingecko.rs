use crate::error::MarketDataError;
use crate::responses::MarketChartResponse;
use crate::MarketDataSource;
use async_trait::async_trait;
use chrono::{DateTime, Datelike};
use configuration::MarketDataSettings;
use core_types::PricePoint;
use std::time::Duration;

/// Width of the synthetic high/low range as a fraction of the close.
const SYNTHETIC_RANGE: f64 = 0.04;

/// A `MarketDataSource` backed by the public CoinGecko v3 API.
///
/// The `market_chart` endpoint only returns closes and volumes, so open, high
/// and low are synthesized from the close (see [`synthesize_bar`]).
#[derive(Clone)]
pub struct CoinGeckoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CoinGeckoClient {
    pub fn new(settings: &MarketDataSettings) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    async fn market_chart(&self, coin_id: &str, days: u32) -> Result<MarketChartResponse, MarketDataError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, coin_id);
        let days = days.to_string();
        let mut request = self.client.get(&url).query(&[
            ("vs_currency", "usd"),
            ("days", days.as_str()),
            ("interval", "daily"),
        ]);
        if let Some(key) = &self.api_key {
            request = request.header("x-cg-pro-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(MarketDataError::Api(format!(
                "CoinGecko returned {status} for {coin_id}: {text}"
            )));
        }
        serde_json::from_str(&text).map_err(|e| MarketDataError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn fetch_series(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>, MarketDataError> {
        let chart = self.market_chart(coin_id, days).await?;

        let points: Vec<PricePoint> = chart
            .prices
            .iter()
            .enumerate()
            .map(|(index, &(ts, price))| {
                let volume = chart.total_volumes.get(index).map_or(0.0, |&(_, v)| v);
                synthesize_bar(ts as i64, price, volume)
            })
            .collect();

        tracing::debug!(coin_id, days, points = points.len(), "Fetched CoinGecko series");
        Ok(points)
    }
}

/// Builds a full bar from a close-only sample.
///
/// The OHL spread is a deterministic function of the timestamp, so
/// re-fetching the same day always produces the same bar.
pub fn synthesize_bar(timestamp: i64, price: f64, volume: f64) -> PricePoint {
    let seed = (timestamp % 10_000) as f64;
    let range = price * SYNTHETIC_RANGE;
    let wick = seed.cos().abs() * range;

    PricePoint {
        timestamp,
        price,
        open: price + (seed.sin() - 0.5) * range,
        high: price + wick,
        low: price - wick,
        volume,
        time: short_date(timestamp),
    }
}

/// `"M/D"` in UTC, or an empty string for an out-of-range timestamp.
pub(crate) fn short_date(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| format!("{}/{}", dt.month(), dt.day()))
        .unwrap_or_default()
}
