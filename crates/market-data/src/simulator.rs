use crate::coingecko::short_date;
use crate::error::MarketDataError;
use crate::MarketDataSource;
use async_trait::async_trait;
use chrono::Utc;
use core_types::PricePoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DAY_MS: i64 = 86_400_000;
const START_PRICE: f64 = 50_000.0;
/// Shifts the uniform draw so the walk drifts slightly upward.
const DRIFT_CENTER: f64 = 0.48;
const STEP_SCALE: f64 = 0.05;
const MAX_VOLUME: f64 = 10_000_000.0;

/// An offline `MarketDataSource` producing a daily random walk.
///
/// Used when the live API is unreachable or rate limited, and for demos.
/// The coin id is ignored: every series starts from the same price level.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSource {
    seed: Option<u64>,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A simulator whose walks are reproducible for a given start time.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Generates `days` daily bars, the first stamped `start_ms`.
    pub fn generate(&self, days: u32, start_ms: i64) -> Vec<PricePoint> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut price = START_PRICE;
        (0..i64::from(days))
            .map(|day| {
                let step: f64 = rng.random();
                price *= 1.0 + (step - DRIFT_CENTER) * STEP_SCALE;
                let timestamp = start_ms + day * DAY_MS;
                PricePoint {
                    timestamp,
                    price,
                    open: price * 0.99,
                    high: price * 1.02,
                    low: price * 0.98,
                    volume: rng.random::<f64>() * MAX_VOLUME,
                    time: short_date(timestamp),
                }
            })
            .collect()
    }
}

#[async_trait]
impl MarketDataSource for SimulatedSource {
    async fn fetch_series(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>, MarketDataError> {
        let start_ms = Utc::now().timestamp_millis() - i64::from(days) * DAY_MS;
        tracing::debug!(coin_id, days, seeded = self.seed.is_some(), "Generating simulated series");
        Ok(self.generate(days, start_ms))
    }
}
