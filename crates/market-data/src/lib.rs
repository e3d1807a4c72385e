//! # AlphaDesk Market Data
//!
//! Adapters that turn an upstream source into `PricePoint` series: the live
//! CoinGecko client, an offline random-walk simulator, and a JSON file
//! loader. The factor engine never talks to this crate directly; the binary
//! fetches here and hands plain slices to `factors`.

use async_trait::async_trait;
use core_types::PricePoint;

pub mod coingecko;
pub mod coins;
pub mod error;
pub mod file;
pub mod responses;
pub mod simulator;

// --- Public API ---
pub use coingecko::{synthesize_bar, CoinGeckoClient};
pub use coins::{resolve_coin_id, CoinInfo, POPULAR_COINS};
pub use error::MarketDataError;
pub use file::load_series_file;
pub use simulator::SimulatedSource;

/// The abstract interface for anything that can supply a daily price series.
/// The live client and the simulator both implement it, so callers can swap
/// one for the other.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetches roughly `days` daily bars for `coin_id`, oldest first.
    async fn fetch_series(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>, MarketDataError>;
}

/// A target series with the reference it is compared against.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub target: Vec<PricePoint>,
    pub reference: Vec<PricePoint>,
    /// `true` when the live fetch failed and both series are simulated.
    pub simulated: bool,
}

/// Fetches the target and reference series concurrently.
///
/// When both ids are the same the reference is a copy of the target, which
/// puts relative factors at zero.
pub async fn fetch_pair(
    source: &dyn MarketDataSource,
    target_id: &str,
    reference_id: &str,
    days: u32,
) -> Result<(Vec<PricePoint>, Vec<PricePoint>), MarketDataError> {
    if target_id == reference_id {
        let target = source.fetch_series(target_id, days).await?;
        return Ok((target.clone(), target));
    }
    tokio::try_join!(
        source.fetch_series(target_id, days),
        source.fetch_series(reference_id, days),
    )
}

/// Like [`fetch_pair`], but never fails.
///
/// On any fetch error a single simulated series is used for both target and
/// reference, and the snapshot is flagged as simulated.
pub async fn fetch_pair_or_simulate(
    source: &dyn MarketDataSource,
    fallback: &SimulatedSource,
    target_id: &str,
    reference_id: &str,
    days: u32,
) -> MarketSnapshot {
    match fetch_pair(source, target_id, reference_id, days).await {
        Ok((target, reference)) => MarketSnapshot {
            target,
            reference,
            simulated: false,
        },
        Err(e) => {
            tracing::warn!(error = %e, target_id, "Market data unavailable, using simulated series");
            let series = fallback
                .fetch_series(target_id, days)
                .await
                .unwrap_or_default();
            MarketSnapshot {
                reference: series.clone(),
                target: series,
                simulated: true,
            }
        }
    }
}
